pub mod defs;

pub use defs::{FigureDef, FigureKind, FigureSet, LegendPosition, builtin_figures};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetSelection {
    Paper,
    Appendix,
    All,
}

impl SetSelection {
    pub fn sets(self) -> &'static [FigureSet] {
        match self {
            SetSelection::Paper => &[FigureSet::Paper],
            SetSelection::Appendix => &[FigureSet::Appendix],
            SetSelection::All => &[FigureSet::Paper, FigureSet::Appendix],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/figures/tests.rs"]
mod tests;
