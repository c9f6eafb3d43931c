//! Spacing scale in terminal cells.

pub struct Spacing;

impl Spacing {
    pub const XS: u16 = 1;
    pub const SM: u16 = 2;
    pub const LG: u16 = 3;
}
