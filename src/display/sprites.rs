//! ASCII art. Each sprite is one `&str` per row, sized to the default
//! entity dimensions in `constants`.

pub const PLAYER: [&str; 3] = [
    " |\\   ",
    "=[##)>",
    " |/   ",
];

pub const SPACECRAFT: [&str; 3] = [
    "  /-\\ ",
    "<=(@)=",
    "  \\-/ ",
];

pub const OCTOPUS: [&str; 3] = [
    " (oo) ",
    "(~~~~)",
    " /||\\ ",
];

pub const EXTRA_LIFE: [&str; 2] = [
    "(♥)",
    " +1",
];

pub const BULLET: &str = "=>";

/// Explosion sprite sheet, one 6×3 frame per animation step.
pub const EXPLOSION_SHEET: [[&str; 3]; 6] = [
    ["      ", "  **  ", "      "],
    ["  ..  ", " .**. ", "  ..  "],
    [" .**. ", ".*##*.", " .**. "],
    ["*.##.*", ".#@@#.", "*.##.*"],
    ["* .. *", " .  . ", "* .. *"],
    [".    .", "      ", ".    ."],
];

/// The sheet frame for an animation step. Steps past the end of the sheet
/// reuse its last frame.
pub fn explosion_frame(step: u32) -> &'static [&'static str; 3] {
    let last = EXPLOSION_SHEET.len() - 1;
    &EXPLOSION_SHEET[(step as usize).min(last)]
}
