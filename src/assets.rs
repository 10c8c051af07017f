//! Compiled Icon Assets
//!
//! The built-in 16x16 icon set, compiled into the binary as XPM descriptions
//! and decoded at startup by `xpm::parse_image`. There is deliberately no
//! asset wired for the exit action in the current set; its cache entry stays
//! empty and the renderer draws nothing in its place.

/// Boot logo (power symbol).
pub const LOGO_XPM: &[&str] = &[
    "16 16 3 1",
    "  c None",
    ". c #E06000",
    "o c #FFA040",
    "       oo       ",
    "       oo       ",
    "   .   oo   .   ",
    "  ..   oo   ..  ",
    " ..    oo    .. ",
    " ..    oo    .. ",
    "..     oo     ..",
    "..            ..",
    "..            ..",
    "..            ..",
    " ..          .. ",
    " ..          .. ",
    "  ...      ...  ",
    "   ..........   ",
    "     ......     ",
    "                ",
];

/// Generic system / host machine.
pub const SYSTEM_XPM: &[&str] = &[
    "16 16 3 1",
    "  c None",
    ". c #9098A8",
    "o c #4878B8",
    "                ",
    " .............. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .............. ",
    "      ....      ",
    "      ....      ",
    "    ........    ",
    "    ........    ",
    "                ",
];

/// Back to the parent menu.
pub const BACK_XPM: &[&str] = &[
    "16 16 2 1",
    "  c None",
    ". c #B0B8C8",
    "                ",
    "                ",
    "      ..        ",
    "     ...        ",
    "    ....        ",
    "   ..........   ",
    "  ...........   ",
    " ............   ",
    "  ...........   ",
    "   ..........   ",
    "    ....        ",
    "     ...        ",
    "      ..        ",
    "                ",
    "                ",
    "                ",
];

/// Reboot the machine.
pub const REBOOT_XPM: &[&str] = &[
    "16 16 3 1",
    "  c None",
    ". c #B0B8C8",
    "o c #FFA040",
    "                ",
    "     ......     ",
    "   ...    ..    ",
    "  ..        o   ",
    " ..        ooo  ",
    " ..       ooooo ",
    " ..             ",
    " ..             ",
    " ..          .. ",
    " ..          .. ",
    "  ..        ..  ",
    "   ..      ..   ",
    "    ........    ",
    "      ....      ",
    "                ",
    "                ",
];

/// Rescan for bootable devices.
pub const RESCAN_XPM: &[&str] = &[
    "16 16 3 1",
    "  c None",
    ". c #B0B8C8",
    "o c #808890",
    "                ",
    "    ......      ",
    "   ..    ..     ",
    "  ..      ..    ",
    "  ..      ..    ",
    "  ..      ..    ",
    "  ..      ..    ",
    "   ..    ..     ",
    "    ......o     ",
    "         ooo    ",
    "          ooo   ",
    "           ooo  ",
    "            ooo ",
    "             oo ",
    "                ",
    "                ",
];

/// Toggle debug info.
pub const DEBUG_XPM: &[&str] = &[
    "16 16 3 1",
    "  c None",
    ". c #B05050",
    "o c #D0D0D0",
    "                ",
    "   o        o   ",
    "    o      o    ",
    "     ......     ",
    "    ........    ",
    "   ..........   ",
    "  o.........o   ",
    "   ..........   ",
    "  o.........o   ",
    "   ..........   ",
    "  o.........o   ",
    "   ..........   ",
    "    ........    ",
    "     ......     ",
    "                ",
    "                ",
];

/// Hard disk.
pub const HD_XPM: &[&str] = &[
    "16 16 4 1",
    "  c None",
    ". c #9098A8",
    "o c #5868A0",
    "x c #50C050",
    "                ",
    "                ",
    "  ............  ",
    " .............. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .oooooooooooo. ",
    " .............. ",
    " ..........xx.. ",
    " .............. ",
    "  ............  ",
    "                ",
    "                ",
];

/// SD card.
pub const SD_XPM: &[&str] = &[
    "16 16 3 1",
    "  c None",
    ". c #4878B8",
    "o c #D8C050",
    "                ",
    "     .........  ",
    "    ..........  ",
    "   ...........  ",
    "  ............  ",
    "  .oo.oo.oo.o.  ",
    "  ............  ",
    "  ............  ",
    "  ............  ",
    "  ............  ",
    "  ............  ",
    "  ............  ",
    "  ............  ",
    "  ............  ",
    "                ",
    "                ",
];

/// MMC card.
pub const MMC_XPM: &[&str] = &[
    "16 16 3 1",
    "  c None",
    ". c #6890C0",
    "o c #D8C050",
    "                ",
    "                ",
    "   ..........   ",
    "   .oo.oo.oo.   ",
    "   ..........   ",
    "   ..........   ",
    "   ..........   ",
    "   ..........   ",
    "   ..........   ",
    "   ..........   ",
    "   ..........   ",
    "   ..........   ",
    "   ..........   ",
    "   ..........   ",
    "                ",
    "                ",
];

/// In-memory image (initramfs and friends).
pub const MEMORY_XPM: &[&str] = &[
    "16 16 3 1",
    "  c None",
    ". c #508050",
    "o c #80C080",
    "                ",
    "  o  o  o  o    ",
    "  o  o  o  o    ",
    " .............. ",
    " .............. ",
    " ..oooooooooo.. ",
    " ..oooooooooo.. ",
    " ..oooooooooo.. ",
    " ..oooooooooo.. ",
    " ..oooooooooo.. ",
    " ..oooooooooo.. ",
    " .............. ",
    " .............. ",
    "  o  o  o  o    ",
    "  o  o  o  o    ",
    "                ",
];

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[&[&str]] = &[
        LOGO_XPM, SYSTEM_XPM, BACK_XPM, REBOOT_XPM, RESCAN_XPM, DEBUG_XPM, HD_XPM, SD_XPM,
        MMC_XPM, MEMORY_XPM,
    ];

    #[test]
    fn test_all_assets_are_well_formed() {
        for asset in ALL {
            let image = crate::xpm::parse_image(asset, 32)
                .unwrap_or_else(|e| panic!("asset failed to decode: {}", e));
            assert_eq!(image.width(), 16);
            assert_eq!(image.height(), 16);
        }
    }
}
