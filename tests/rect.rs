use approx::assert_relative_eq;

use vecrec::{GOLDEN_RATIO, Rect, Shape, Vector};

struct Sprite {
    bottom: f32,
    left: f32,
    width: f32,
    height: f32,
}

impl Shape for Sprite {
    fn bounding_rect(&self) -> Rect {
        Rect::new(self.left, self.bottom, self.width, self.height)
    }
}

#[test]
fn factories_compute_canonical_form() {
    let v = Vector::new(5.0, 6.0);

    assert_eq!(Rect::from_size(8.0, 11.0), Rect::new(0.0, 0.0, 8.0, 11.0));
    assert_eq!(Rect::from_size(1.0, 2.0), Rect::new(0.0, 0.0, 1.0, 2.0));
    assert_eq!(Rect::from_width(3.0, 2.0), Rect::new(0.0, 0.0, 3.0, 6.0));
    assert_eq!(Rect::from_height(4.0, 2.0), Rect::new(0.0, 0.0, 8.0, 4.0));
    assert_eq!(Rect::from_vector(v), Rect::new(5.0, 6.0, 0.0, 0.0));
    assert_eq!(Rect::from_square(9.0), Rect::new(0.0, 0.0, 9.0, 9.0));
    assert_eq!(Rect::from_sides(5.0, 7.0, 8.0, 6.0), Rect::new(5.0, 6.0, 3.0, 1.0));
    assert_eq!(Rect::from_corners((8.0, 4.0), (3.0, 1.0)), Rect::new(3.0, 1.0, 5.0, 3.0));
    assert_eq!(Rect::from_bottom_left(v, 1.0, 2.0), Rect::new(5.0, 6.0, 1.0, 2.0));
    assert_eq!(Rect::from_bottom_left((7.0, 8.0), 3.0, 4.0), Rect::new(7.0, 8.0, 3.0, 4.0));
    assert_eq!(Rect::from_center(v, 8.0, 6.0), Rect::new(1.0, 3.0, 8.0, 6.0));
    assert_eq!(Rect::from_center((7.0, 8.0), 4.0, 2.0), Rect::new(5.0, 7.0, 4.0, 2.0));
    assert_eq!(Rect::null(), Rect::new(0.0, 0.0, 0.0, 0.0));

    let golden = Rect::from_width(GOLDEN_RATIO, 1.0 / GOLDEN_RATIO);
    assert_relative_eq!(golden.height(), 1.0, epsilon = 1e-6);
}

#[test]
fn from_center_edges() {
    let r = Rect::from_center(Vector::new(1.0, 2.0), 2.0, 2.0);
    assert_eq!(
        (r.left(), r.bottom(), r.right(), r.top()),
        (0.0, 1.0, 2.0, 3.0)
    );
    assert_eq!(r, Rect::new(0.0, 1.0, 2.0, 2.0));
    assert_eq!(r.center(), Vector::new(1.0, 2.0));
}

#[test]
fn from_corners_accepts_every_ordering() {
    let expected = Rect::new(1.0, 2.0, 3.0, 4.0);
    let (l, b, r, t) = (1.0f32, 2.0f32, 4.0f32, 6.0f32);
    let pairs = [
        ((l, b), (r, t)),
        ((r, t), (l, b)),
        ((l, t), (r, b)),
        ((r, b), (l, t)),
    ];
    for (p, q) in pairs {
        assert_eq!(Rect::from_corners(p, q), expected);
    }
}

#[test]
fn point_cloud_union_and_intersection() {
    let points = [(1.0, 5.0), (0.0, 3.0), (4.0, 2.0), (6.0, 3.0), (5.0, 0.0)];
    assert_eq!(Rect::from_points(points), Some(Rect::new(0.0, 0.0, 6.0, 5.0)));
    assert_eq!(Rect::from_points(Vec::<Vector>::new()), None);

    let a = Rect::new(1.0, 1.0, 4.0, 4.0);
    let b = Rect::new(4.0, 4.0, 4.0, 4.0);
    assert_eq!(Rect::from_union([a, b]), Some(Rect::new(1.0, 1.0, 7.0, 7.0)));
    assert_eq!(Rect::from_intersection([a, b]), Some(Rect::new(4.0, 4.0, 1.0, 1.0)));
    assert_eq!(Rect::from_intersection([&a, &b, &Rect::from_size(1.0, 1.0)]), None);
    assert_eq!(Rect::from_union(Vec::<Rect>::new()), None);
}

#[test]
fn custom_shapes_interoperate() {
    let sprite = Sprite {
        bottom: 1.0,
        left: 2.0,
        width: 3.0,
        height: 4.0,
    };
    let r = Rect::from_shape(&sprite);
    assert_eq!(r, Rect::new(2.0, 1.0, 3.0, 4.0));

    let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(r.inside(&outer));
    assert!(!outer.inside(&sprite));
    assert_eq!(Rect::from_union([&sprite as &dyn Shape, &outer]), Some(outer));
}

// 5x5 grid of points and 4x4 boxes around them against a 10x10 box at (5, 5).
#[test]
fn collision_grid() {
    let bx = Rect::new(5.0, 5.0, 10.0, 10.0);

    let in_middle = |i: usize| (1..=3).contains(&i);

    for x in 0..5 {
        for y in 0..5 {
            let point = Vector::new(x as f32, y as f32) * 5.0;
            let minibox = Rect::from_center(point, 4.0, 4.0);

            let point_inside = in_middle(x) && in_middle(y);
            let minibox_inside = x == 2 && y == 2;
            let minibox_touching = point_inside;

            assert_eq!(bx.contains(point), point_inside, "{point}");
            assert_eq!(bx.touching(point), point_inside, "{point}");

            assert_eq!(bx.contains(minibox), minibox_inside, "{minibox}");
            assert_eq!(bx.touching(minibox), minibox_touching, "{minibox}");

            assert_eq!(minibox.touching(bx), minibox_touching, "{minibox}");
            assert_eq!(minibox.overlaps(&bx), bx.overlaps(&minibox));
            assert_eq!(minibox.inside(&bx), minibox_inside, "{minibox}");
            assert_eq!(minibox.outside(bx), !minibox_touching, "{minibox}");
        }
    }
}
