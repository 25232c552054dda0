use std::ops::Add;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

impl Pos {
    /// the eight positions surrounding this one, bounds are the caller's concern.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| pos!(dx, dy)))
            .filter(|offset| *offset != pos!(0, 0))
            .map(move |offset| self + offset)
    }
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

#[test]
fn test_neighbors() {
    let around: Vec<_> = pos!(0, 0).neighbors().collect();
    assert_eq!(around.len(), 8);
    assert!(!around.contains(&pos!(0, 0)));
    assert!(around.contains(&pos!(-1, -1)));
    assert!(around.contains(&pos!(1, 1)));
    assert!(pos!(5, 5).neighbors().all(|p| (p.x - 5).abs() <= 1 && (p.y - 5).abs() <= 1));
}
