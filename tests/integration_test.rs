use float_cmp::approx_eq;

use mirror_tracer::catalogue::SceneCatalogue;
use mirror_tracer::colour::Colour;
use mirror_tracer::config::RenderConfig;
use mirror_tracer::geometry::{closest_hit, Surface};
use mirror_tracer::materials::Material;
use mirror_tracer::math::{Point, Vector};
use mirror_tracer::ppm::PpmImage;
use mirror_tracer::ray::Ray;
use mirror_tracer::render::{render, Framebuffer};
use mirror_tracer::scene::{Light, Scene};

fn small_config(size: usize) -> RenderConfig {
    RenderConfig { width: size, height: size, ..RenderConfig::default() }
}

fn lone_sphere_scene() -> Scene {
    let mut scene = Scene::default();
    let material = Material::new(Colour::splat(0.1), Colour::splat(0.6), Colour::splat(0.3), 0.0);
    scene.add_surface(Surface::sphere(Point::new(0.0, 0.0, 5.0), 1.0, material));
    // On the line from the eye to the sphere centre
    scene.add_light(Light::new(Point::new(0.0, 0.0, -2.0), Colour::WHITE));
    scene
}

#[test]
fn normalise_gives_unit_length() {
    let points = [
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 0.0, -5.0),
        Point::new(3.0, -4.0, 12.0),
        Point::new(0.001, 0.002, -0.003),
        Point::new(250.0, 1.0, -75.5),
    ];
    for p in points.iter() {
        let length = p.normalise().to_vector().length();
        assert!(approx_eq!(f32, length, 1.0, epsilon = 1e-6), "{:?} -> {}", p, length);
    }
}

#[test]
fn nearest_hit_across_mixed_surfaces() {
    // Floor at y = -1
    let point = Point::new(0.0, 1.0, 0.0);
    let surfaces = vec![
        Surface::plane(point, Ray::along(point, Vector::new(0.0, 1.0, 0.0)), Material::default()),
        Surface::ellipsoid(Point::new(0.0, 0.0, 6.0), Vector::new(1.0, 2.0, 0.5), Material::default()),
        Surface::cylinder(Point::new(0.0, 0.0, 9.0), Vector::new(0.0, 1.0, 0.0), 1.0, 4.0, Material::default()),
    ];

    let straight = Ray::along(Point::origin(), Vector::new(0.0, 0.0, 1.0));
    let (index, hit) = closest_hit(&straight, &surfaces).unwrap();
    assert_eq!(index, 1);
    assert!(approx_eq!(f32, hit.t, 5.5, epsilon = 1e-5));

    let downward = Ray::new(Point::origin(), Point::new(0.0, -1.0, 1.0));
    let (index, hit) = closest_hit(&downward, &surfaces).unwrap();
    assert_eq!(index, 0);
    assert!(approx_eq!(f32, hit.t, 2.0f32.sqrt(), epsilon = 1e-5));
}

#[test]
fn lit_sphere_is_brighter_than_background() {
    let scene = lone_sphere_scene();
    let config = small_config(21);
    let mut framebuffer = Framebuffer::new(config.width, config.height);
    render(&config.tracer(&scene), &mut framebuffer);

    let centre = framebuffer.get(10, 10);
    for &(x, y) in [(0, 0), (20, 0), (0, 20), (20, 20), (10, 0), (0, 10)].iter() {
        let border = framebuffer.get(x, y);
        assert_eq!(border, config.background);
        assert!(centre.intensity() > border.intensity(), "{:?} vs {:?}", centre, border);
    }
}

#[test]
fn rendering_leaves_scene_untouched() {
    let mut catalogue = SceneCatalogue::builtin(3);
    let before = catalogue.select(2).unwrap().clone();
    let config = small_config(16);
    let mut framebuffer = Framebuffer::new(config.width, config.height);
    render(&config.tracer(catalogue.active()), &mut framebuffer);

    assert_eq!(catalogue.active(), &before);
}

#[test]
fn builtin_scenes_render_within_range() {
    let mut catalogue = SceneCatalogue::builtin(11);
    let config = small_config(24);
    for number in 1..=catalogue.len() {
        let scene = catalogue.select(number).unwrap();
        let mut framebuffer = Framebuffer::new(config.width, config.height);
        render(&config.tracer(scene), &mut framebuffer);

        let pixels: Vec<Colour> = framebuffer.rows().flatten().cloned().collect();
        assert_eq!(pixels.len(), 24 * 24);
        for c in pixels.iter() {
            for channel in [c.r, c.g, c.b].iter() {
                assert!(*channel >= 0.0 && *channel <= 1.0, "scene {}: {:?}", number, c);
            }
        }
        assert!(pixels.iter().any(|c| *c != config.background), "scene {} shows nothing", number);

        let text = PpmImage::from_framebuffer(&framebuffer).get_text();
        assert!(text.starts_with("P3\n24 24\n255\n"));
    }
}

#[test]
fn deeper_limit_only_matters_for_mirrors() {
    let scene = lone_sphere_scene();
    let shallow = RenderConfig { depth_limit: 0, ..small_config(9) };
    let deep = RenderConfig { depth_limit: 5, ..small_config(9) };

    let mut a = Framebuffer::new(9, 9);
    let mut b = Framebuffer::new(9, 9);
    render(&shallow.tracer(&scene), &mut a);
    render(&deep.tracer(&scene), &mut b);

    // Nothing in the scene reflects, so recursion never starts
    assert!(a.rows().flatten().eq(b.rows().flatten()));
}
