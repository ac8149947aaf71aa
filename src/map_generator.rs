//! Map generation

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{Tile, HEIGHT, WIDTH};

/// Random map generator for trying out the translator.
pub struct MapGenerator {
    random: StdRng,
}

impl MapGenerator {
    /// Probability of an interior wall block starting at a cell
    const P_WALL: f64 = 0.08;
    const ENEMIES: usize = 6;
    const BALLS: usize = 4;

    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a bordered map with walls, enemies, balls and one start
    ///
    /// Walls are short horizontal runs placed at random inside the border.
    /// Enemies, balls and the start marker go on distinct empty cells.
    pub fn generate_map(&mut self) -> Vec<Vec<char>> {
        let mut grid: Vec<Vec<char>> = (0..HEIGHT)
            .map(|y| {
                (0..WIDTH)
                    .map(|x| {
                        if y == 0 || y == HEIGHT - 1 || x == 0 || x == WIDTH - 1 {
                            Tile::S_WALL
                        } else {
                            Tile::S_EMPTY
                        }
                    })
                    .collect()
            })
            .collect();

        for y in 2..HEIGHT - 2 {
            let mut x = 2;
            while x < WIDTH - 2 {
                if self.random.gen_bool(Self::P_WALL) {
                    let len = self.random.gen_range(1..=4).min(WIDTH - 2 - x);
                    for cell in &mut grid[y][x..x + len] {
                        *cell = Tile::S_WALL;
                    }
                    // Keep a gap after each run
                    x += len + 1;
                } else {
                    x += 1;
                }
            }
        }

        let mut free: Vec<(usize, usize)> = (1..HEIGHT - 1)
            .flat_map(|y| (1..WIDTH - 1).map(move |x| (y, x)))
            .filter(|&(y, x)| grid[y][x] == Tile::S_EMPTY)
            .collect();
        free.shuffle(&mut self.random);

        let placements = std::iter::once(Tile::S_START)
            .chain(std::iter::repeat(Tile::S_ENEMY).take(Self::ENEMIES))
            .chain(std::iter::repeat(Tile::S_BALL).take(Self::BALLS));
        for (c, (y, x)) in placements.zip(free) {
            grid[y][x] = c;
        }

        grid
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{map_generator::MapGenerator, Cell, GameMap, Tile, HEIGHT, WIDTH};

    #[test]
    fn generate_parseable_map() {
        let mut gen = MapGenerator::new(Some(0));
        let res = gen.generate_map();

        assert_eq!(res.len(), HEIGHT);
        assert!(res.iter().all(|row| row.len() == WIDTH));

        let text = res.iter().map(|row| row.iter().join("")).join("\n");
        let map = GameMap::parse(&text).unwrap();

        assert!(map.row(0).iter().all(|c| *c == Cell::Wall));
        assert!(map.row(HEIGHT - 1).iter().all(|c| *c == Cell::Wall));
        let start = map.start();
        assert_eq!(res[start.y][start.x], Tile::S_START);
    }

    #[test]
    fn single_start_marker() {
        for seed in 0..20 {
            let res = MapGenerator::new(Some(seed)).generate_map();
            let starts = res.iter().flatten().filter(|c| **c == Tile::S_START).count();
            assert_eq!(starts, 1);
        }
    }

    #[test]
    fn seed_is_reproducible() {
        let a = MapGenerator::new(Some(42)).generate_map();
        let b = MapGenerator::new(Some(42)).generate_map();
        assert_eq!(a, b);
    }
}
