use ember_engine::camera::Camera;
use ember_engine::coords::{ColorRgba, UvRect, Vec2, Viewport};
use ember_engine::renderable::{
    ParticleRenderable, SpriteRenderable, TexCoordIndex, TextureRenderable, TexturedQuad,
};
use ember_engine::shader::{same_program, BlendMode, ShaderRegistry};
use ember_engine::texture::{TextureInfo, TextureInfoStore};
use ember_engine::{RenderableError, TextureStateReason};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn camera() -> Camera {
    Camera::new(Vec2::zero(), 100.0, Viewport::new(800.0, 600.0))
}

#[test]
fn sprite_sheet_element_by_pixels() {
    let mut textures = TextureInfoStore::new();
    let sheet = textures.register(TextureInfo::new(100, 50));
    let shaders = ShaderRegistry::new();

    let mut hero = SpriteRenderable::new(sheet, &textures, &shaders).unwrap();
    hero.set_region_by_pixels(10.0, 60.0, 5.0, 45.0).unwrap();

    let uv = hero.uv_rect();
    assert!(approx(uv.left, 0.1));
    assert!(approx(uv.right, 0.6));
    assert!(approx(uv.bottom, 0.1));
    assert!(approx(uv.top, 0.9));
    assert!(approx(hero.left_pixel_index(), 10.0));
    assert!(approx(hero.bottom_pixel_index(), 5.0));
    assert!(approx(hero.width_pixels(), 51.0));
    assert!(approx(hero.height_pixels(), 41.0));

    let corners = hero.uv_corner_array();
    assert_eq!(TexCoordIndex::Right.read(&corners), uv.right);
    assert_eq!(TexCoordIndex::Bottom.read(&corners), uv.bottom);
}

#[test]
fn uv_setter_round_trips_through_corner_array() {
    let mut textures = TextureInfoStore::new();
    let sheet = textures.register(TextureInfo::new(256, 256));
    let mut s = SpriteRenderable::new(sheet, &textures, &ShaderRegistry::new()).unwrap();

    for &(l, r, b, t) in &[(0.0, 1.0, 0.0, 1.0), (0.125, 0.25, 0.5, 0.75), (0.3, 0.3, 0.6, 0.6)] {
        s.set_region_by_uv(l, r, b, t);
        assert_eq!(s.uv_corner_array(), [r, t, l, t, r, b, l, b]);
        assert!(approx(s.width_pixels(), (r - l) * 256.0 + 1.0));
        assert!(approx(s.height_pixels(), (t - b) * 256.0 + 1.0));
    }
}

#[test]
fn mixed_frame_records_in_submission_order() {
    let mut textures = TextureInfoStore::new();
    let sheet = textures.register(TextureInfo::new(64, 64));
    let spark = textures.register(TextureInfo::new(8, 8));
    let shaders = ShaderRegistry::new();

    let mut a = SpriteRenderable::new(sheet, &textures, &shaders).unwrap();
    a.set_region_by_uv(0.0, 0.5, 0.5, 1.0);
    let mut b = SpriteRenderable::new(sheet, &textures, &shaders).unwrap();
    b.set_region_by_uv(0.5, 1.0, 0.0, 0.5);
    let mut p = ParticleRenderable::new(spark, &textures, &shaders).unwrap();
    p.set_color(ColorRgba::new(1.0, 0.5, 0.0, 1.0));
    let background = TextureRenderable::new(sheet, &textures, &shaders).unwrap();

    let mut cam = camera();
    let scene: [&dyn TexturedQuad; 4] = [&background, &a, &b, &p];
    for r in scene {
        r.draw(&mut cam);
    }

    let items = cam.draw_list().items();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0].uv, UvRect::full().corner_array());
    assert_eq!(items[1].uv, a.uv_corner_array());
    assert_eq!(items[2].uv, b.uv_corner_array());
    assert_eq!(items[3].blend, BlendMode::Additive);

    // background + two sprites share the sheet and alpha blending
    let batches = cam.draw_list().batches();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].range, 0..3);

    cam.clear();
    assert!(cam.draw_list().is_empty());
}

#[test]
fn particle_and_sprite_pick_different_programs() {
    let mut textures = TextureInfoStore::new();
    let id = textures.register(TextureInfo::new(4, 4));
    let shaders = ShaderRegistry::new();
    let p = ParticleRenderable::new(id, &textures, &shaders).unwrap();
    let s = SpriteRenderable::new(id, &textures, &shaders).unwrap();
    assert!(!same_program(p.shader(), s.shader()));
    assert_eq!(p.shader().blend_mode(), BlendMode::Additive);
}

#[test]
fn unknown_texture_fails_construction() {
    let mut other = TextureInfoStore::new();
    let id = other.register(TextureInfo::new(4, 4));
    let empty = TextureInfoStore::new();
    let result = SpriteRenderable::new(id, &empty, &ShaderRegistry::new());
    assert!(matches!(
        result,
        Err(RenderableError::InvalidTextureState { reason: TextureStateReason::Unbound, .. })
    ));
}

#[test]
fn zero_sized_texture_rejects_pixel_region() {
    let mut textures = TextureInfoStore::new();
    let id = textures.register(TextureInfo::new(32, 0));
    let mut s = SpriteRenderable::new(id, &textures, &ShaderRegistry::new()).unwrap();
    let err = s.set_region_by_pixels(0.0, 16.0, 0.0, 16.0).unwrap_err();
    assert_eq!(
        err,
        RenderableError::InvalidTextureState {
            texture: id,
            reason: TextureStateReason::ZeroDimensions { width: 32, height: 0 },
        }
    );
    assert_eq!(s.uv_rect(), UvRect::full());
}
