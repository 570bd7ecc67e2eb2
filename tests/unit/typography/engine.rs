use super::*;

const SYSTEM_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

fn system_font() -> Option<Vec<u8>> {
    let bytes = std::fs::read(SYSTEM_FONT).ok();
    if bytes.is_none() {
        eprintln!("skipping: {SYSTEM_FONT} not installed");
    }
    bytes
}

#[test]
fn garbage_bytes_do_not_register() {
    let mut engine = TextEngine::new();
    assert!(engine.register(b"definitely not a font").is_none());
    assert!(engine.register(&[]).is_none());
}

#[test]
fn invalid_size_is_rejected() {
    let mut engine = TextEngine::new();
    assert!(engine.measure("x", "Anything", 0.0).is_err());
    assert!(engine.line_height("Anything", f32::NAN).is_err());
}

#[test]
fn wider_text_measures_wider() {
    let Some(bytes) = system_font() else {
        return;
    };
    let mut engine = TextEngine::new();
    let family = engine.register(&bytes).unwrap();
    let short = engine.measure("Ghost", &family, 16.0).unwrap();
    let long = engine.measure("Ghost Ghost", &family, 16.0).unwrap();
    assert!(short > 0.0);
    assert!(long > short);
    assert!(engine.line_height(&family, 16.0).unwrap() >= 16.0);
}

#[test]
fn shaped_glyphs_advance_left_to_right() {
    let Some(bytes) = system_font() else {
        return;
    };
    let mut engine = TextEngine::new();
    let family = engine.register(&bytes).unwrap();
    let shaped = engine.shape("abc", &family, 20.0).unwrap();
    assert_eq!(shaped.glyphs.len(), 3);
    assert!(shaped.glyphs.windows(2).all(|w| w[1].x > w[0].x));
    assert!(shaped.glyphs.iter().all(|g| g.y > 0.0 && g.y <= shaped.height));
}
