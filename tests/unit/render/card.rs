use super::*;

use crate::{content::record::TypeLabel, typography::loader::FontSource};

struct NoFonts;

impl FontSource for NoFonts {
    fn load(&self, _name: &str) -> Option<Vec<u8>> {
        None
    }
}

fn renderer(seed: u64) -> CardRenderer {
    CardRenderer::new(RenderConfig::default().with_seed(seed).with_font_dirs(Vec::new())).unwrap()
}

fn builtin_loader() -> TypographyLoader {
    TypographyLoader::new(Box::new(NoFonts), "arial.ttf")
}

fn red_photo(w: u32, h: u32) -> Photo {
    let img = image::RgbImage::from_pixel(w, h, image::Rgb([220, 20, 20]));
    Photo::from_image(image::DynamicImage::ImageRgb8(img)).unwrap()
}

fn record(label: TypeLabel, description: &str) -> ContentRecord {
    ContentRecord::new(
        "Doom-Waffle Prime",
        label,
        ("Syrup", 1200),
        ("Crunch", 800),
        description,
    )
    .unwrap()
}

fn long_description() -> String {
    "Every morning the waffle rises again, louder than before. ".repeat(5)[..270].to_string()
}

#[test]
fn builtin_render_fills_the_fixed_canvas() {
    let r = renderer(7);
    let card = r
        .render_with_loader(
            &record(TypeLabel::Ghost, "Boo."),
            &red_photo(800, 600),
            &mut builtin_loader(),
        )
        .unwrap();

    assert_eq!(card.image.dimensions(), (600, 840));
    assert_eq!(card.report.category, Category::Mystical);
    assert_eq!(card.report.badge_text, "Ghost");
    assert_eq!(card.report.title_tier, FontTier::Builtin);
    assert_eq!(card.report.text_tier, FontTier::Builtin);
    assert_eq!(card.report.texture_seed, 7);
    assert_eq!(card.report.ability_lines, vec!["Boo.".to_string()]);
    assert!(!card.report.ability_truncated);
    assert_eq!(
        card.report.photo_size,
        layout::contain_fit((800, 600), (524, 304))
    );
}

#[test]
fn photo_lands_centered_in_inner_frame() {
    let r = renderer(1);
    let card = r
        .render_with_loader(
            &record(TypeLabel::Lag, "Buffering."),
            &red_photo(800, 600),
            &mut builtin_loader(),
        )
        .unwrap();
    let inner = r.layout().image_inner;
    let cx = (inner.x + inner.width as i32 / 2) as u32;
    let cy = (inner.y + inner.height as i32 / 2) as u32;
    let px = card.image.get_pixel(cx, cy).0;
    assert!(px[0] > 200 && px[1] < 40 && px[2] < 40, "{px:?}");
}

#[test]
fn fixed_seed_is_byte_identical() {
    let r = renderer(42);
    let rec = record(TypeLabel::Spicy, "Zap.");
    let photo = red_photo(300, 500);
    let a = r.render_with_loader(&rec, &photo, &mut builtin_loader()).unwrap();
    let b = r.render_with_loader(&rec, &photo, &mut builtin_loader()).unwrap();
    assert_eq!(a.image, b.image);
    assert_eq!(a.to_png_bytes().unwrap(), b.to_png_bytes().unwrap());
}

#[test]
fn textured_categories_depend_on_seed() {
    let rec = record(TypeLabel::Ghost, "Boo.");
    let photo = red_photo(64, 64);
    let a = renderer(1)
        .render_with_loader(&rec, &photo, &mut builtin_loader())
        .unwrap();
    let b = renderer(2)
        .render_with_loader(&rec, &photo, &mut builtin_loader())
        .unwrap();
    assert_ne!(a.image, b.image);
}

#[test]
fn long_description_is_truncated_with_ellipsis() {
    let r = renderer(3);
    let card = r
        .render_with_loader(
            &record(TypeLabel::Main, &long_description()),
            &red_photo(100, 100),
            &mut builtin_loader(),
        )
        .unwrap();
    let report = &card.report;
    assert!(report.ability_truncated);
    let last = report.ability_lines.last().unwrap();
    assert!(last.ends_with("..."), "{last:?}");
    let text = r.layout().ability_text;
    let line_h = crate::typography::builtin::line_height(20) as usize;
    assert!(report.ability_lines.len() * line_h <= text.height as usize);
}

#[test]
fn stage_tagging_rewrites_render_stage() {
    let err = in_stage(RenderStage::Badge)(CardError::render_msg(RenderStage::Rasterize, "x"));
    assert_eq!(err.stage(), Some(RenderStage::Badge));
    let err = in_stage(RenderStage::Stats)(CardError::validation("bad"));
    assert_eq!(err.stage(), Some(RenderStage::Stats));
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let mut config = RenderConfig::default();
    config.badge_font_size = 0.0;
    assert!(matches!(
        CardRenderer::new(config),
        Err(CardError::Config(_))
    ));
}

fn named(name: &str) -> ContentRecord {
    ContentRecord::new(name, TypeLabel::Ghost, ("Syrup", 1200), ("Crunch", 800), "Boo.").unwrap()
}

#[test]
fn builtin_badge_label_stays_inside_badge() {
    let r = renderer(9);
    let card = r
        .render_with_loader(&named("Wisp"), &red_photo(64, 64), &mut builtin_loader())
        .unwrap();

    let mut loader = builtin_loader();
    let font = loader.badge_font(Category::Mystical, r.config().badge_font_size);
    assert_eq!(font.builtin_em(), 32);
    let badge = r
        .layout()
        .badge_rect(builtin::text_width("Ghost", 32), builtin::em_for(32.0));
    assert!(badge.height >= 32 + 2 * layout::BADGE_TEXT_INSET.1);

    let label = crate::style::registry::palette(Category::Mystical)
        .background
        .to_array();
    let header = r.layout().header.inset(layout::HEADER_RADIUS);
    let mut hits = 0;
    for y in header.y..header.bottom() {
        for x in header.x..header.right() {
            if card.image.get_pixel(x as u32, y as u32).0 != label {
                continue;
            }
            hits += 1;
            assert!(
                x >= badge.x && x < badge.right() && y >= badge.y && y < badge.bottom(),
                "label pixel at ({x}, {y}) outside badge {badge:?}"
            );
        }
    }
    assert!(hits > 0);
}

#[test]
fn clip_to_width_keeps_longest_fitting_prefix() {
    let mut loader = builtin_loader();
    let font = loader.font_for(FontRole::Title, Category::Mystical);
    assert_eq!(font.builtin_em(), 28);
    assert_eq!(clip_to_width(&mut loader, &font, "ABCDEFG", 100.0), "ABC");
    assert_eq!(clip_to_width(&mut loader, &font, "AB", 100.0), "AB");
    assert_eq!(clip_to_width(&mut loader, &font, "ABC", 0.0), "");
}

#[test]
fn long_title_ends_before_badge_inset() {
    let r = renderer(4);
    let photo = red_photo(64, 64);
    let short = r
        .render_with_loader(&named("W"), &photo, &mut builtin_loader())
        .unwrap();
    let long = r
        .render_with_loader(&named(&"W".repeat(25)), &photo, &mut builtin_loader())
        .unwrap();

    let limit = r.layout().header.right() - layout::BADGE_RIGHT_INSET as i32;
    let mut rightmost = 0;
    for (x, y, px) in long.image.enumerate_pixels() {
        if *px == *short.image.get_pixel(x, y) {
            continue;
        }
        assert!((x as i32) < limit, "title pixel at ({x}, {y}) past {limit}");
        rightmost = rightmost.max(x);
    }
    assert!(rightmost > 300, "{rightmost}");
}
