//! Layout of the palette: which index holds which color, how indices are
//! grouped, and what each one is used for.

pub const BLACK: usize = 0;
pub const ALMOST_BLACK: usize = 1;
pub const DARK_GREY: usize = 2;
pub const BRIGHT_GREY: usize = 3;
pub const SUBTLE_GREY: usize = 4;
pub const UI_LIGHT_GREYS: [usize; 4] = range(SUBTLE_GREY + 1);
pub const CRUST: usize = UI_LIGHT_GREYS[3] + 1;
pub const MANTLE: usize = CRUST + 1;
pub const WHITE: usize = MANTLE + 1;

pub const DARK_COLORS: [usize; 5] = range(WHITE + 1);
pub const BRIGHT_COLORS: [usize; 6] = range(DARK_COLORS[4] + 1);
pub const MANUAL_COLORS: [usize; 3] = range(BRIGHT_COLORS[5] + 1);
pub const TEXT_COLORS: [usize; 14] = concat(concat::<5, 6, 11>(DARK_COLORS, BRIGHT_COLORS), MANUAL_COLORS);

pub const PALETTE_SIZE: usize = MANUAL_COLORS[2] + 1;

pub const GREYS: [usize; 12] = range(BLACK);
pub const MANUAL_GREYS: [usize; 4] = [BLACK, CRUST, MANTLE, WHITE];
pub const UI_GREYS: [usize; 8] = concat(concat::<1, 4, 5>([ALMOST_BLACK], UI_LIGHT_GREYS), [CRUST, MANTLE, WHITE]);
pub const TEXT_GREYS: [usize; 4] = [BLACK, DARK_GREY, BRIGHT_GREY, SUBTLE_GREY];

pub const TEXT: [usize; 18] = concat(TEXT_GREYS, TEXT_COLORS);

/// Palette indices of the 16 terminal colors, in ANSI order.
pub const ANSI: [usize; 16] = [
    BLACK,
    DARK_COLORS[4],
    BRIGHT_COLORS[0],
    MANUAL_COLORS[0],
    DARK_COLORS[2],
    DARK_COLORS[3],
    DARK_COLORS[1],
    SUBTLE_GREY,
    BRIGHT_GREY,
    BRIGHT_COLORS[5],
    MANUAL_COLORS[2],
    MANUAL_COLORS[1],
    BRIGHT_COLORS[2],
    BRIGHT_COLORS[4],
    BRIGHT_COLORS[1],
    WHITE,
];

pub const ANSI_NAMES: [&str; 16] = [
    "Black",
    "Red",
    "Green",
    "Yellow",
    "Blue",
    "Magenta",
    "Cyan",
    "White",
    "Bright Black",
    "Bright Red",
    "Bright Green",
    "Bright Yellow",
    "Bright Blue",
    "Bright Magenta",
    "Bright Cyan",
    "Bright White",
];

pub const RAINBOW: [usize; 6] = [
    BRIGHT_COLORS[5],
    MANUAL_COLORS[0],
    MANUAL_COLORS[1],
    MANUAL_COLORS[2],
    BRIGHT_COLORS[2],
    BRIGHT_COLORS[3],
];

pub const RAINBOW_NAMES: [&str; 6] = ["Red", "Orange", "Yellow", "Green", "Blue", "Violet"];

/// What a palette entry is used for in an editor theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Text,
    Labels,
    Params,
    Functions,
    Operators,
    Keywords,
    Classes,
    Subtle,
    Comments,
    Strings,
    Escapes,
    Constants,
    Cursor,
    Errors,
    Rainbow1,
    Rainbow2,
    Rainbow3,
    Ansi6,

    Base,
    Mantle,
    Crust,
    Surface0,
    Surface1,
    Surface2,
    Overlay0,
    Subtext1,
}

impl Role {
    pub const ALL: [Role; PALETTE_SIZE] = [
        Role::Text,
        Role::Labels,
        Role::Params,
        Role::Functions,
        Role::Operators,
        Role::Keywords,
        Role::Classes,
        Role::Subtle,
        Role::Comments,
        Role::Strings,
        Role::Escapes,
        Role::Constants,
        Role::Cursor,
        Role::Errors,
        Role::Rainbow1,
        Role::Rainbow2,
        Role::Rainbow3,
        Role::Ansi6,
        Role::Base,
        Role::Mantle,
        Role::Crust,
        Role::Surface0,
        Role::Surface1,
        Role::Surface2,
        Role::Overlay0,
        Role::Subtext1,
    ];

    pub const fn index(&self) -> usize {
        match self {
            Role::Text => BLACK,
            Role::Labels => DARK_GREY,
            Role::Params => DARK_COLORS[0],
            Role::Functions => DARK_COLORS[2],
            Role::Operators => BRIGHT_COLORS[2],
            Role::Keywords => DARK_COLORS[3],
            Role::Classes => DARK_COLORS[4],
            Role::Subtle => SUBTLE_GREY,
            Role::Comments => BRIGHT_GREY,
            Role::Strings => BRIGHT_COLORS[0],
            Role::Escapes => BRIGHT_COLORS[1],
            Role::Constants => BRIGHT_COLORS[3],
            Role::Cursor => BRIGHT_COLORS[4],
            Role::Errors => BRIGHT_COLORS[5],
            Role::Rainbow1 => MANUAL_COLORS[0],
            Role::Rainbow2 => MANUAL_COLORS[1],
            Role::Rainbow3 => MANUAL_COLORS[2],
            Role::Ansi6 => DARK_COLORS[1],

            Role::Base => WHITE,
            Role::Mantle => MANTLE,
            Role::Crust => CRUST,
            Role::Surface0 => UI_LIGHT_GREYS[3],
            Role::Surface1 => UI_LIGHT_GREYS[2],
            Role::Surface2 => UI_LIGHT_GREYS[1],
            Role::Overlay0 => UI_LIGHT_GREYS[0],
            Role::Subtext1 => ALMOST_BLACK,
        }
    }

    pub const fn key(&self) -> &'static str {
        match self {
            Role::Text => "text",
            Role::Labels => "labels",
            Role::Params => "params",
            Role::Functions => "functions",
            Role::Operators => "operators",
            Role::Keywords => "keywords",
            Role::Classes => "classes",
            Role::Subtle => "subtle",
            Role::Comments => "comments",
            Role::Strings => "strings",
            Role::Escapes => "escapes",
            Role::Constants => "constants",
            Role::Cursor => "cursor",
            Role::Errors => "errors",
            Role::Rainbow1 => "rainbow1",
            Role::Rainbow2 => "rainbow2",
            Role::Rainbow3 => "rainbow3",
            Role::Ansi6 => "ansi6",
            Role::Base => "base",
            Role::Mantle => "mantle",
            Role::Crust => "crust",
            Role::Surface0 => "surface0",
            Role::Surface1 => "surface1",
            Role::Surface2 => "surface2",
            Role::Overlay0 => "overlay0",
            Role::Subtext1 => "subtext1",
        }
    }

    /// Editor elements drawn with this role. Empty for roles that only
    /// exist to fill the terminal and rainbow sets.
    pub const fn description(&self) -> &'static str {
        match self {
            Role::Text => "Text",
            Role::Labels => "Sub-Headlines, Labels",
            Role::Functions => "Methods, Functions, Properties, Links, URLs, Tags",
            Role::Classes => {
                "Warnings, Classes, Interfaces, Annotations, Metadata, Enums, Types, Attributes"
            }
            Role::Params => "Parameters",
            Role::Keywords => "Keywords, Followed Links, Active Line Number",
            Role::Constants => "Constants, Numbers, Warnings",
            Role::Operators => "Operators, Enum Variants, On Hover Links",
            Role::Errors => "Errors, Symbols, Atoms, Builtins",
            Role::Subtle => "Subtle, Line Numbers",
            Role::Comments => "Comments, Braces, Delimiters",
            Role::Strings => "Success, Strings",
            Role::Escapes => "Escape Sequences, Regex",
            Role::Cursor => "Cursor",
            Role::Rainbow1 | Role::Rainbow2 | Role::Rainbow3 | Role::Ansi6 => "",

            Role::Base => "Background Pane",
            Role::Mantle | Role::Crust => "Secondary Panes",
            Role::Surface0 | Role::Surface1 | Role::Surface2 => "Surface Elements",
            Role::Overlay0 => "Overlays",
            Role::Subtext1 => "Sub-Headlines, Labels",
        }
    }

    /// Whether the role colors interface chrome rather than text.
    pub const fn is_ui(&self) -> bool {
        matches!(
            self,
            Role::Base
                | Role::Mantle
                | Role::Crust
                | Role::Surface0
                | Role::Surface1
                | Role::Surface2
                | Role::Overlay0
                | Role::Subtext1
        )
    }

    pub fn from_key(key: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.key() == key)
    }

    /// The role assigned to a palette index.
    pub fn of_index(index: usize) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.index() == index)
    }
}

pub fn ansi_position(index: usize) -> Option<usize> {
    ANSI.iter().position(|&i| i == index)
}

pub fn rainbow_position(index: usize) -> Option<usize> {
    RAINBOW.iter().position(|&i| i == index)
}

const fn range<const N: usize>(start: usize) -> [usize; N] {
    let mut out = [0; N];
    let mut i = 0;
    while i < N {
        out[i] = start + i;
        i += 1;
    }
    out
}

const fn concat<const A: usize, const B: usize, const C: usize>(
    a: [usize; A],
    b: [usize; B],
) -> [usize; C] {
    assert!(A + B == C);

    let mut out = [0; C];
    let mut i = 0;
    while i < A {
        out[i] = a[i];
        i += 1;
    }
    while i < C {
        out[i] = b[i - A];
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn layout() {
        assert_eq!(UI_LIGHT_GREYS, [5, 6, 7, 8]);
        assert_eq!((CRUST, MANTLE, WHITE), (9, 10, 11));
        assert_eq!(DARK_COLORS, [12, 13, 14, 15, 16]);
        assert_eq!(BRIGHT_COLORS, [17, 18, 19, 20, 21, 22]);
        assert_eq!(MANUAL_COLORS, [23, 24, 25]);
        assert_eq!(UI_GREYS, [1, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(TEXT[..5], [0, 2, 3, 4, 12]);
        assert_eq!(PALETTE_SIZE, 26);
    }

    #[test]
    fn grey_text_ui_disjoint() {
        let ui = HashSet::from(UI_GREYS);
        let text = HashSet::from(TEXT_GREYS);
        assert!(ui.is_disjoint(&text));
    }

    #[test]
    fn grey_text_ui_union() {
        let union = UI_GREYS
            .iter()
            .chain(&TEXT_GREYS)
            .copied()
            .collect::<HashSet<_>>();
        assert_eq!(union, HashSet::from(GREYS));
    }

    #[test]
    fn semantic_mapping_injective() {
        let indices = Role::ALL.map(|role| role.index());
        let unique = indices.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), Role::ALL.len());
        assert!(indices.iter().all(|&i| i < PALETTE_SIZE));
    }

    #[test]
    fn keys_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_key(role.key()), Some(role));
            assert_eq!(Role::of_index(role.index()), Some(role));
        }
        assert_eq!(Role::from_key("mauve"), None);
    }

    #[test]
    fn ui_roles_use_ui_greys() {
        for role in Role::ALL.iter().filter(|role| role.is_ui()) {
            assert!(UI_GREYS.contains(&role.index()), "{role:?}");
        }
    }

    #[test]
    fn ansi_and_rainbow_lookup() {
        assert_eq!(ansi_position(WHITE), Some(15));
        assert_eq!(rainbow_position(BRIGHT_COLORS[3]), Some(5));
        assert_eq!(rainbow_position(BLACK), None);
    }
}
