//! Body regions and their fatigue-injury severity weights.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body regions a complaint can be filed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BodyLocation {
    #[serde(rename = "Thorax")]
    Thorax,
    #[serde(rename = "Thoracic Spine")]
    ThoracicSpine,
    #[serde(rename = "Lumbar Spine")]
    LumbarSpine,
    #[serde(rename = "Pelvis and Buttocks")]
    PelvisAndButtocks,
    #[serde(rename = "Hip and Groin")]
    HipAndGroin,
    #[serde(rename = "Head")]
    Head,
    #[serde(rename = "Shoulder")]
    Shoulder,
    #[serde(rename = "Knee")]
    Knee,
    #[serde(rename = "Thigh")]
    Thigh,
    #[serde(rename = "Wrist and Hand")]
    WristAndHand,
    #[serde(rename = "Forearm")]
    Forearm,
    #[serde(rename = "Leg/Ankle/Foot")]
    LegAnkleFoot,
    #[serde(rename = "Elbow")]
    Elbow,
}

impl BodyLocation {
    pub const ALL: [BodyLocation; 13] = [
        BodyLocation::Thorax,
        BodyLocation::ThoracicSpine,
        BodyLocation::LumbarSpine,
        BodyLocation::PelvisAndButtocks,
        BodyLocation::HipAndGroin,
        BodyLocation::Head,
        BodyLocation::Shoulder,
        BodyLocation::Knee,
        BodyLocation::Thigh,
        BodyLocation::WristAndHand,
        BodyLocation::Forearm,
        BodyLocation::LegAnkleFoot,
        BodyLocation::Elbow,
    ];

    /// Severity weight used by the Fatigue-Injury Index (1–3).
    pub const fn weight(self) -> u8 {
        match self {
            BodyLocation::Thorax
            | BodyLocation::ThoracicSpine
            | BodyLocation::LumbarSpine
            | BodyLocation::PelvisAndButtocks
            | BodyLocation::HipAndGroin => 3,
            BodyLocation::Head
            | BodyLocation::Shoulder
            | BodyLocation::Knee
            | BodyLocation::Thigh => 2,
            BodyLocation::WristAndHand
            | BodyLocation::Forearm
            | BodyLocation::LegAnkleFoot
            | BodyLocation::Elbow => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BodyLocation::Thorax => "Thorax",
            BodyLocation::ThoracicSpine => "Thoracic Spine",
            BodyLocation::LumbarSpine => "Lumbar Spine",
            BodyLocation::PelvisAndButtocks => "Pelvis and Buttocks",
            BodyLocation::HipAndGroin => "Hip and Groin",
            BodyLocation::Head => "Head",
            BodyLocation::Shoulder => "Shoulder",
            BodyLocation::Knee => "Knee",
            BodyLocation::Thigh => "Thigh",
            BodyLocation::WristAndHand => "Wrist and Hand",
            BodyLocation::Forearm => "Forearm",
            BodyLocation::LegAnkleFoot => "Leg/Ankle/Foot",
            BodyLocation::Elbow => "Elbow",
        }
    }

    /// Name the Portuguese-language complaint form submits.
    pub const fn label_pt(self) -> &'static str {
        match self {
            BodyLocation::Thorax => "Tórax",
            BodyLocation::ThoracicSpine => "Coluna Torácica",
            BodyLocation::LumbarSpine => "Coluna Lombar",
            BodyLocation::PelvisAndButtocks => "Pelve e Nádegas",
            BodyLocation::HipAndGroin => "Quadril e virilha",
            BodyLocation::Head => "Cabeça",
            BodyLocation::Shoulder => "Ombro",
            BodyLocation::Knee => "Joelho",
            BodyLocation::Thigh => "Coxa",
            BodyLocation::WristAndHand => "Punho e Mão",
            BodyLocation::Forearm => "Antebraço",
            BodyLocation::LegAnkleFoot => "Perna, Tornozelo e Pé",
            BodyLocation::Elbow => "Cotovelo",
        }
    }

    /// Exact, case-sensitive match against either label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|loc| loc.label() == label || loc.label_pt() == label)
    }
}

/// Weight for a free-text location; anything unrecognised weighs 0.
pub fn location_weight(location: &str) -> u8 {
    BodyLocation::from_label(location).map_or(0, BodyLocation::weight)
}
