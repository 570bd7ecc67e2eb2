use std::{cell::RefCell, collections::HashMap, rc::Rc};

use super::*;

const SYSTEM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Source where every resource is unavailable, recording each probe.
#[derive(Default)]
struct Unavailable {
    probes: Rc<RefCell<Vec<String>>>,
}

impl FontSource for Unavailable {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        self.probes.borrow_mut().push(name.to_string());
        None
    }
}

/// Source serving fixed bytes for selected names.
struct Fixed(HashMap<&'static str, Vec<u8>>);

impl FontSource for Fixed {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        self.0.get(name).cloned()
    }
}

#[test]
fn every_tier_unavailable_still_yields_builtin() {
    let mut loader = TypographyLoader::new(Box::new(Unavailable::default()), "arial.ttf");
    for category in Category::ALL {
        for role in FontRole::ALL {
            let font = loader.font_for(role, category);
            assert_eq!(font.tier, FontTier::Builtin);
            assert!(font.is_builtin());
            assert_eq!(font.size_px, role.fallback_size_px());
            assert!(loader.text_width(&font, "Ghost") > 0.0);
            assert!(loader.line_height(&font) > 0.0);
        }
    }
}

#[test]
fn strategies_are_tried_in_order_and_cached() {
    let probes = Rc::new(RefCell::new(Vec::new()));
    let mut loader = TypographyLoader::new(
        Box::new(Unavailable {
            probes: probes.clone(),
        }),
        "arial.ttf",
    );
    loader.font_for(FontRole::Title, Category::Mystical);
    assert_eq!(
        *probes.borrow(),
        vec!["georgiab.ttf", "georgia.ttf", "arial.ttf"]
    );

    loader.font_for(FontRole::Stat, Category::Mystical);
    assert_eq!(probes.borrow().len(), 3, "georgia.ttf and arial.ttf come from cache");
}

#[test]
fn garbage_bytes_count_as_unavailable() {
    let mut map = HashMap::new();
    map.insert("impact.ttf", b"not a font".to_vec());
    let mut loader = TypographyLoader::new(Box::new(Fixed(map)), "arial.ttf");
    let font = loader.font_for(FontRole::Title, Category::Heroic);
    assert_eq!(font.tier, FontTier::Builtin);
}

#[test]
fn badge_falls_back_to_header_font() {
    let mut loader = TypographyLoader::new(Box::new(Unavailable::default()), "arial.ttf");
    let font = loader.badge_font(Category::Mystical, 20.0);
    assert_eq!(font.role, FontRole::Header);
    assert_eq!(font.size_px, FontRole::Header.fallback_size_px());
}

#[test]
fn alternates_and_generic_fill_in() {
    let Ok(bytes) = std::fs::read(SYSTEM_FONT) else {
        eprintln!("skipping: {SYSTEM_FONT} not installed");
        return;
    };
    let mut map = HashMap::new();
    map.insert("georgia.ttf", bytes.clone());
    map.insert("arial.ttf", bytes);
    let mut loader = TypographyLoader::new(Box::new(Fixed(map)), "arial.ttf");

    let title = loader.font_for(FontRole::Title, Category::Mystical);
    assert_eq!(title.tier, FontTier::Alternate);
    assert_eq!(title.size_px, 14.0);

    let stat = loader.font_for(FontRole::Stat, Category::Mystical);
    assert_eq!(stat.tier, FontTier::Category);

    let text = loader.font_for(FontRole::Text, Category::Mystical);
    assert_eq!(text.tier, FontTier::Generic);

    let badge = loader.badge_font(Category::Mystical, 20.0);
    assert_eq!(badge.tier, FontTier::Generic);
    assert_eq!(badge.size_px, 20.0);
}
