#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scheme {
    SdJwt,
    CsdJwt,
    Merkle,
    BbsPlus,
}

impl Scheme {
    /// Column header written by the benchmark harness.
    pub fn column(self) -> &'static str {
        match self {
            Scheme::SdJwt => "SD-JWT",
            Scheme::CsdJwt => "CSD-JWT",
            Scheme::Merkle => "MERKLE",
            Scheme::BbsPlus => "BBS+",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}
