use crate::player::{ColorToken, Glyph};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageId {
    Reconnaissance,
    Refactoring,
    Verification,
    BountyClaim,
}

/// Fixed descriptor for one step of the plan-act-verify loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub id: StageId,
    pub number: &'static str,
    pub title: &'static str,
    pub status: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
    pub color: ColorToken,
}

pub const STAGES: [Stage; 4] = [
    Stage {
        id: StageId::Reconnaissance,
        number: "01",
        title: "RECONNAISSANCE",
        status: "SCANNING TARGETS...",
        description: "Mohtion scans your repo for high-complexity targets.",
        glyph: Glyph::Search,
        color: ColorToken::Blue,
    },
    Stage {
        id: StageId::Refactoring,
        number: "02",
        title: "REFACTORING",
        status: "GENERATING PATCH...",
        description: "The agent generates a fix using LLM-driven analysis.",
        glyph: Glyph::Code,
        color: ColorToken::Orange,
    },
    Stage {
        id: StageId::Verification,
        number: "03",
        title: "VERIFICATION",
        status: "RUNNING TESTS...",
        description: "Tests run in a sandbox. Self-healing activates on failure.",
        glyph: Glyph::ShieldCheck,
        color: ColorToken::Green,
    },
    Stage {
        id: StageId::BountyClaim,
        number: "04",
        title: "BOUNTY CLAIM",
        status: "OPENING PR...",
        description: "A polished PR is opened only if all checks pass.",
        glyph: Glyph::GitMerge,
        color: ColorToken::Purple,
    },
];
