/// What a step renders.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SceneKind {
    Framing,      // Ruin -> structure -> restitution spotlight
    Dataset,      // Augmentation preview
    Architecture, // Two-generator pipeline figure
    Model,        // U-Net generator figure
    Structure,    // Compare footprint with generated structure
    Texture,      // Compare structure with restored detail
    Evaluation,   // Metrics and error heatmap
    Gallery,      // Result figures with lightbox
    Limitations,  // Failure case under a lens
    Paper,        // The publication
}

/// Glyph drawn next to a step label.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Icon {
    Layout,
    FileImage,
    Info,
    Cpu,
    Box,
    Layers,
    Activity,
    Images,
    Alert,
    FileText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneDescriptor {
    pub id: u32,
    pub label: &'static str,
    pub icon: Icon,
    pub kind: SceneKind,
}

const fn step(id: u32, label: &'static str, icon: Icon, kind: SceneKind) -> SceneDescriptor {
    SceneDescriptor { id, label, icon, kind }
}

/// Navigation order of the presentation.
pub const STEPS: [SceneDescriptor; 10] = [
    step(0, "Context", Icon::Layout, SceneKind::Framing),
    step(1, "Dataset", Icon::FileImage, SceneKind::Dataset),
    step(2, "Architecture", Icon::Info, SceneKind::Architecture),
    step(3, "Generator", Icon::Cpu, SceneKind::Model),
    step(4, "Structure", Icon::Box, SceneKind::Structure),
    step(5, "Texture", Icon::Layers, SceneKind::Texture),
    step(6, "Evaluation", Icon::Activity, SceneKind::Evaluation),
    step(7, "Gallery", Icon::Images, SceneKind::Gallery),
    step(8, "Limitations", Icon::Alert, SceneKind::Limitations),
    step(9, "Paper", Icon::FileText, SceneKind::Paper),
];

/// Reconstruction stage of a floor plan.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PlanStage {
    Footprint,
    Zoning,
    Furnishing,
}

#[derive(Debug, Clone, Copy)]
pub struct StageInfo {
    pub stage: PlanStage,
    pub label: &'static str,
    pub caption: &'static str,
}

pub const STAGES: [StageInfo; 3] = [
    StageInfo { stage: PlanStage::Footprint, label: "(a) Incomplete Ruins", caption: "Input: Fragmented ruins" },
    StageInfo { stage: PlanStage::Zoning, label: "(b) Structural Elements", caption: "Identifying missing structures" },
    StageInfo { stage: PlanStage::Furnishing, label: "(c) Restitution", caption: "Output: Complete restoration" },
];

/// Semantic label colours used by the floor plans, as RGB.
pub const LEGEND: [(&str, [u8; 3]); 5] = [
    ("Pendentive", [0xBE, 0xFF, 0xBE]),
    ("Turkish triangle", [0xFF, 0xFF, 0xBE]),
    ("Tromp", [0xBE, 0xBE, 0xFF]),
    ("Dome", [0x00, 0x00, 0x00]),
    ("Wall", [0xBE, 0xBE, 0xBE]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_and_ordered() {
        let ids: HashSet<u32> = STEPS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), STEPS.len());
        for (i, s) in STEPS.iter().enumerate() {
            assert_eq!(s.id as usize, i);
        }
    }

    #[test]
    fn every_scene_kind_appears_once() {
        let kinds: HashSet<SceneKind> = STEPS.iter().map(|s| s.kind).collect();
        assert_eq!(kinds.len(), STEPS.len());
    }

    #[test]
    fn pipeline_runs_before_results() {
        let pos = |kind| STEPS.iter().position(|s| s.kind == kind).unwrap();
        assert!(pos(SceneKind::Structure) < pos(SceneKind::Texture));
        assert!(pos(SceneKind::Texture) < pos(SceneKind::Evaluation));
        assert_eq!(STEPS[0].kind, SceneKind::Framing);
    }
}
