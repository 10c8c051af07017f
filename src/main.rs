use sdl2::event::Event;
use sdl2::keyboard::Keycode;

mod assets;
mod config;
mod font;
mod gui;
mod icons;
mod menu;
mod screenshot;
mod surface;
mod theme;
mod xpm;

use config::Config;
use gui::GuiContext;
use icons::{BorrowedIconList, IconId, IconRef, OwnedIconList};
use menu::{MenuItem, MenuList, SubmenuId};
use surface::{SdlSurface, Surface};
use std::time::Duration;

/// Frame delay while idling in the event loop.
const FRAME_DELAY: Duration = Duration::from_millis(16);

/// Device-specific icon shipped by the first fake boot target, decoded at
/// scan time the way a real scanner picks icons up from the device itself.
const CUSTOM_ICON_XPM: &[&str] = &[
    "16 16 2 1",
    "  c None",
    ". c #58A858",
    "       ..       ",
    "      ....      ",
    "      ....      ",
    "     ......     ",
    "     ......     ",
    "    ........    ",
    "    ........    ",
    "   ..........   ",
    "   ..........   ",
    "  ............  ",
    "  ............  ",
    " .............. ",
    " .............. ",
    "       ..       ",
    "       ..       ",
    "                ",
];

/// Stand-in for the external device scanner: a fixed set of boot targets
/// plus the menu actions. The first target carries its own icon (owned by
/// the menu); everything else references the fixed cache.
fn scan_devices(depth: u8) -> (MenuList, Option<OwnedIconList>, BorrowedIconList) {
    let mut menu = MenuList::new();
    let mut refs = Vec::new();

    let custom = match xpm::parse_image(CUSTOM_ICON_XPM, depth) {
        Ok(image) => Some(image),
        Err(e) => {
            eprintln!("Failed to decode device icon: {}", e);
            None
        }
    };
    menu.push(MenuItem::new("Boot /dev/sda1 (vmlinuz-6.8)"));
    refs.push(Some(IconRef::Loaded(0)));

    let targets = [
        ("Boot /dev/sda2 (vmlinuz-6.1 fallback)", IconId::HardDisk),
        ("Boot /dev/mmcblk0p1 (vmlinuz-6.8)", IconId::Mmc),
        ("Boot /dev/sdb1 (rescue)", IconId::SdCard),
        ("Boot initramfs (memory)", IconId::Memory),
    ];
    for (label, icon) in targets {
        menu.push(MenuItem::new(label));
        refs.push(Some(IconRef::Cache(icon)));
    }

    menu.push(MenuItem::with_submenu("System", SubmenuId(0)));
    refs.push(Some(IconRef::Cache(IconId::System)));
    menu.push(MenuItem::new("Rescan devices"));
    refs.push(Some(IconRef::Cache(IconId::Rescan)));
    menu.push(MenuItem::new("Reboot"));
    refs.push(Some(IconRef::Cache(IconId::Reboot)));
    menu.push(MenuItem::new("Exit"));
    refs.push(Some(IconRef::Cache(IconId::Exit)));

    (
        menu,
        Some(OwnedIconList::new(vec![custom])),
        BorrowedIconList::new(refs),
    )
}

/// The placeholder list the scanner produces when nothing is bootable.
fn empty_scan() -> (MenuList, Option<OwnedIconList>, BorrowedIconList) {
    let mut menu = MenuList::new();
    menu.push(MenuItem::new("Rescan devices"));
    (
        menu,
        None,
        BorrowedIconList::new(vec![Some(IconRef::Cache(IconId::Rescan))]),
    )
}

fn main() -> Result<(), String> {
    let config = Config::load_default();
    let mut ctx: GuiContext<SdlSurface> = GuiContext::initialize_with(&config)?;
    let mut event_pump = ctx.surface().event_pump()?;

    let (width, height) = ctx.size();
    let (x, y) = ctx.origin();
    println!("UI region {}x{} at ({}, {})", width, height, x, y);

    let (mut menu, loaded, icon_refs) = scan_devices(ctx.surface().depth());
    ctx.set_loaded_icons(loaded);
    ctx.set_menu_icons(Some(icon_refs));

    let mut current: usize = 0;
    ctx.show_menu(&menu, current)?;

    'running: loop {
        let mut dirty = false;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,

                Event::KeyDown {
                    keycode: Some(Keycode::Up),
                    ..
                } => {
                    current = current.saturating_sub(1);
                    dirty = true;
                }

                Event::KeyDown {
                    keycode: Some(Keycode::Down),
                    ..
                } => {
                    if current + 1 < menu.fill() {
                        current += 1;
                    }
                    dirty = true;
                }

                Event::KeyDown {
                    keycode: Some(Keycode::S),
                    ..
                } => {
                    ctx.show_text("Rescanning devices, please wait...")?;
                    std::thread::sleep(Duration::from_millis(600));

                    // Alternate between a populated and an empty scan so the
                    // placeholder path is reachable in the demo.
                    let (next, loaded, refs) = if menu.fill() > 1 {
                        empty_scan()
                    } else {
                        scan_devices(ctx.surface().depth())
                    };
                    menu = next;
                    ctx.set_loaded_icons(loaded);
                    ctx.set_menu_icons(Some(refs));
                    current = 0;
                    dirty = true;
                }

                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    ..
                } => {
                    ctx.show_text("Rebooting...")?;
                    std::thread::sleep(Duration::from_millis(600));
                    dirty = true;
                }

                Event::KeyDown {
                    keycode: Some(Keycode::P),
                    ..
                } => match (ctx.dump_screen(), screenshot::default_dir()) {
                    (Ok(buffer), Some(dir)) => {
                        if let Err(e) = screenshot::save_screenshot(&buffer, dir) {
                            eprintln!("Failed to save screenshot: {}", e);
                        }
                    }
                    (Err(e), _) => eprintln!("Screen dump failed: {}", e),
                    (_, None) => eprintln!("No home directory for screenshots"),
                },

                Event::KeyDown {
                    keycode: Some(Keycode::Return),
                    ..
                } => {
                    if let Some(item) = menu.get(current) {
                        println!("Selected: {}", item.label);
                    }
                }

                _ => {}
            }
        }

        if dirty {
            ctx.show_menu(&menu, current)?;
        }
        std::thread::sleep(FRAME_DELAY);
    }

    ctx.destroy();
    Ok(())
}
