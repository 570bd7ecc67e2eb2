use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CardError::validation("x")
            .to_string()
            .contains("content validation error:")
    );
    assert!(CardError::config("x").to_string().contains("config error:"));
    assert!(
        CardError::render_msg(RenderStage::Badge, "x")
            .to_string()
            .contains("render error in badge stage:")
    );
    assert!(
        CardError::image_load(None, std::io::Error::other("x"))
            .to_string()
            .contains("image load error (<memory>)")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CardError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn render_errors_carry_their_stage() {
    let err = CardError::render(RenderStage::Photo, std::io::Error::other("bad"));
    assert_eq!(err.stage(), Some(RenderStage::Photo));
    assert_eq!(CardError::validation("x").stage(), None);
}

#[test]
fn user_messages_hide_internal_detail() {
    let err = CardError::image_load(
        Some(PathBuf::from("/secret/uploads/me.jpg")),
        std::io::Error::other("permission denied"),
    );
    let msg = err.user_message();
    assert!(msg.contains("try again"));
    assert!(!msg.contains("/secret"));
    assert!(!msg.contains("permission"));

    let err = CardError::render_msg(RenderStage::Encode, "png encoder exploded");
    assert!(!err.user_message().contains("encoder"));
}
