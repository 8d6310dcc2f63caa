/// Stellar classification identifiers used by the field generator.
pub struct ClassInfo {
    pub id: &'static str,
    pub label: &'static str,
}

pub const CLASS_MAP: &[ClassInfo] = &[
    ClassInfo {
        id: "blue_giant",
        label: "Type O/B - Blue Giant",
    },
    ClassInfo {
        id: "blue_star",
        label: "Type B - Blue Main Sequence",
    },
    ClassInfo {
        id: "white_star",
        label: "Type A - White Main Sequence",
    },
    ClassInfo {
        id: "yellow_star",
        label: "Type G - Yellow Main Sequence",
    },
    ClassInfo {
        id: "orange_star",
        label: "Type K - Orange Main Sequence",
    },
    ClassInfo {
        id: "red_dwarf",
        label: "Type M - Red Dwarf",
    },
    ClassInfo {
        id: "red_giant",
        label: "Type M - Red Giant",
    },
    ClassInfo {
        id: "red_supergiant",
        label: "Type M - Red Supergiant",
    },
    ClassInfo {
        id: "white_dwarf",
        label: "White Dwarf",
    },
    ClassInfo {
        id: "neutron_star",
        label: "Neutron Star",
    },
];

pub fn get_class_label(id: &str) -> String {
    CLASS_MAP
        .iter()
        .find(|c| c.id == id)
        .map_or("Unknown Classification", |c| c.label)
        .to_string()
}
