//! Icon Cache
//!
//! The fixed icon set is a closed enumeration indexing an array of decoded
//! images, allocated once at startup and shared by every render. Any entry
//! may be empty — a failed decode, or an icon with no asset wired — and the
//! renderers draw nothing in its place.
//!
//! Per-menu-item icons live outside the fixed cache in one of two containers
//! with different ownership: [`OwnedIconList`] holds images decoded for this
//! menu and releases them when dropped, while [`BorrowedIconList`] holds
//! references into the fixed cache or an owned list and releases only the
//! reference vector. Keeping the two as distinct types makes the release
//! policy a compile-time property instead of a flag.

use crate::assets;
use crate::xpm::{self, XpmImage};

/// The closed set of built-in icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconId {
    Logo,
    System,
    Back,
    Reboot,
    Rescan,
    Debug,
    HardDisk,
    SdCard,
    Mmc,
    Memory,
    Exit,
}

impl IconId {
    pub const COUNT: usize = 11;

    pub const ALL: [IconId; IconId::COUNT] = [
        IconId::Logo,
        IconId::System,
        IconId::Back,
        IconId::Reboot,
        IconId::Rescan,
        IconId::Debug,
        IconId::HardDisk,
        IconId::SdCard,
        IconId::Mmc,
        IconId::Memory,
        IconId::Exit,
    ];

    fn index(self) -> usize {
        match self {
            IconId::Logo => 0,
            IconId::System => 1,
            IconId::Back => 2,
            IconId::Reboot => 3,
            IconId::Rescan => 4,
            IconId::Debug => 5,
            IconId::HardDisk => 6,
            IconId::SdCard => 7,
            IconId::Mmc => 8,
            IconId::Memory => 9,
            IconId::Exit => 10,
        }
    }

    /// The compiled asset for this icon, if one is wired in the current set.
    fn asset(self) -> Option<&'static [&'static str]> {
        match self {
            IconId::Logo => Some(assets::LOGO_XPM),
            IconId::System => Some(assets::SYSTEM_XPM),
            IconId::Back => Some(assets::BACK_XPM),
            IconId::Reboot => Some(assets::REBOOT_XPM),
            IconId::Rescan => Some(assets::RESCAN_XPM),
            IconId::Debug => Some(assets::DEBUG_XPM),
            IconId::HardDisk => Some(assets::HD_XPM),
            IconId::SdCard => Some(assets::SD_XPM),
            IconId::Mmc => Some(assets::MMC_XPM),
            IconId::Memory => Some(assets::MEMORY_XPM),
            // No exit asset in the current set.
            IconId::Exit => None,
        }
    }
}

/// Fixed-size, enum-indexed store of decoded icons.
pub struct IconCache {
    icons: [Option<XpmImage>; IconId::COUNT],
}

impl IconCache {
    /// Decodes every compiled asset at the given color depth. A failed
    /// decode leaves that entry empty and is reported, never propagated.
    pub fn load(depth: u8) -> IconCache {
        let mut icons: [Option<XpmImage>; IconId::COUNT] = Default::default();
        for id in IconId::ALL {
            let Some(asset) = id.asset() else {
                continue;
            };
            match xpm::parse_image(asset, depth) {
                Ok(image) => icons[id.index()] = Some(image),
                Err(e) => eprintln!("Failed to decode icon {:?}: {}", id, e),
            }
        }
        IconCache { icons }
    }

    pub fn get(&self, id: IconId) -> Option<&XpmImage> {
        self.icons[id.index()].as_ref()
    }
}

/// Per-item icons owned by the current menu, released on drop.
#[derive(Default)]
pub struct OwnedIconList {
    images: Vec<Option<XpmImage>>,
}

impl OwnedIconList {
    pub fn new(images: Vec<Option<XpmImage>>) -> Self {
        OwnedIconList { images }
    }

    pub fn get(&self, index: usize) -> Option<&XpmImage> {
        self.images.get(index).and_then(|slot| slot.as_ref())
    }
}

/// A reference to an icon owned elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconRef {
    /// An entry of the fixed cache.
    Cache(IconId),
    /// An entry of the menu's owned list.
    Loaded(usize),
}

impl IconRef {
    /// Resolves the reference against its backing stores. Empty slots and
    /// dangling indices resolve to "no icon".
    pub fn resolve<'a>(
        self,
        cache: &'a IconCache,
        loaded: Option<&'a OwnedIconList>,
    ) -> Option<&'a XpmImage> {
        match self {
            IconRef::Cache(id) => cache.get(id),
            IconRef::Loaded(index) => loaded.and_then(|list| list.get(index)),
        }
    }
}

/// Per-item icon references, one slot per menu entry.
#[derive(Debug, Default)]
pub struct BorrowedIconList {
    refs: Vec<Option<IconRef>>,
}

impl BorrowedIconList {
    pub fn new(refs: Vec<Option<IconRef>>) -> Self {
        BorrowedIconList { refs }
    }

    pub fn get(&self, index: usize) -> Option<IconRef> {
        self.refs.get(index).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_loads_every_wired_asset() {
        let cache = IconCache::load(32);
        for id in IconId::ALL {
            if id == IconId::Exit {
                assert!(cache.get(id).is_none());
            } else {
                assert!(cache.get(id).is_some(), "missing icon {:?}", id);
            }
        }
    }

    #[test]
    fn test_reload_produces_a_complete_cache_each_time() {
        // The cache owns its images, so dropping it releases them; a second
        // load must decode the full set again from the compiled assets.
        for _ in 0..2 {
            let cache = IconCache::load(16);
            assert!(cache.get(IconId::Logo).is_some());
            assert!(cache.get(IconId::Memory).is_some());
            drop(cache);
        }
    }

    #[test]
    fn test_cache_ref_resolves_through_cache() {
        let cache = IconCache::load(32);
        let icon = IconRef::Cache(IconId::Reboot).resolve(&cache, None);
        assert!(icon.is_some());
    }

    #[test]
    fn test_exit_ref_resolves_to_no_icon() {
        let cache = IconCache::load(32);
        assert!(IconRef::Cache(IconId::Exit).resolve(&cache, None).is_none());
    }

    #[test]
    fn test_loaded_ref_resolves_through_owned_list() {
        let cache = IconCache::load(32);
        let image = crate::xpm::parse_image(assets::HD_XPM, 32).unwrap();
        let loaded = OwnedIconList::new(vec![None, Some(image)]);

        assert!(IconRef::Loaded(1).resolve(&cache, Some(&loaded)).is_some());
        assert!(IconRef::Loaded(0).resolve(&cache, Some(&loaded)).is_none());
        // Dangling index, and a loaded ref without a backing list.
        assert!(IconRef::Loaded(7).resolve(&cache, Some(&loaded)).is_none());
        assert!(IconRef::Loaded(1).resolve(&cache, None).is_none());
    }

    #[test]
    fn test_borrowed_list_lookup() {
        let refs = BorrowedIconList::new(vec![
            Some(IconRef::Cache(IconId::HardDisk)),
            None,
            Some(IconRef::Loaded(0)),
        ]);
        assert_eq!(refs.get(0), Some(IconRef::Cache(IconId::HardDisk)));
        assert_eq!(refs.get(1), None);
        assert_eq!(refs.get(2), Some(IconRef::Loaded(0)));
        assert_eq!(refs.get(9), None);
    }
}
