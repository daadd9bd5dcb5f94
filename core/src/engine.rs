use crate::*;

/// Owns one board and enforces the rules on it.
///
/// Rejected moves (out of bounds, already revealed, flagged, game over) return `None` and leave the board untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Engine {
    config: GameConfig,
    board: Grid<Cell>,
    status: GameStatus,
    mines_placed: bool,
    revealed_count: CellCount,
    flagged_count: CellCount,
    triggered_mine: Option<Coord2>,
}

impl Engine {
    pub fn create(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        Self::new(GameConfig::new(width, height, mines)?)
    }

    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Grid::new(config.width, config.height)?;
        Ok(Self {
            config,
            board,
            status: Default::default(),
            mines_placed: false,
            revealed_count: 0,
            flagged_count: 0,
            triggered_mine: None,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn state(&self) -> GameState {
        GameState {
            status: self.status,
            mines_remaining_guess: i32::from(self.config.mines) - i32::from(self.flagged_count),
        }
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// The mine whose reveal lost the game, if any.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_view(&self, coords: Coord2) -> Option<CellView> {
        self.board
            .get(coords)
            .map(|cell| cell.view(self.status.is_finished()))
    }

    /// Places the configured number of mines uniformly at random.
    pub fn place_mines(&mut self) -> Result<()> {
        self.place_mines_with(ShuffleGenerator::new(rand::rng()))
    }

    pub fn place_mines_seeded(&mut self, seed: u64) -> Result<()> {
        self.place_mines_with(ShuffleGenerator::seeded(seed))
    }

    pub fn place_mines_with_rng<R: rand::Rng>(&mut self, rng: R) -> Result<()> {
        self.place_mines_with(ShuffleGenerator::new(rng))
    }

    pub fn place_mines_at(&mut self, mines: &[Coord2]) -> Result<()> {
        self.place_mines_with(FixedLayout(mines))
    }

    /// Lays out mines from `generator` and computes every adjacency count. Only allowed once per game.
    pub fn place_mines_with<G: MineGenerator>(&mut self, generator: G) -> Result<()> {
        if self.mines_placed {
            return Err(GameError::AlreadyInitialized);
        }

        let mines = generator.generate(&self.config);
        self.check_layout(&mines)?;

        for &coords in &mines {
            self.board[coords].is_mine = true;
            for neighbor in self.board.neighbors_of(coords) {
                self.board[neighbor].adjacent_mines += 1;
            }
        }
        self.mines_placed = true;

        log::debug!(
            "Placed {} mines on a {}x{} board",
            mines.len(),
            self.config.width,
            self.config.height
        );
        Ok(())
    }

    /// Validates a whole layout before any cell is touched.
    fn check_layout(&self, mines: &[Coord2]) -> Result<()> {
        if mines.len() != usize::from(self.config.mines) {
            return Err(GameError::MineCountMismatch {
                expected: self.config.mines,
                actual: mines.len(),
            });
        }

        let mut seen: Grid<bool> = Grid::new(self.config.width, self.config.height)?;
        for &coords in mines {
            match seen.get_mut(coords) {
                None => return Err(GameError::InvalidCoords(coords)),
                Some(true) => return Err(GameError::DuplicateMine(coords)),
                Some(slot) => *slot = true,
            }
        }
        Ok(())
    }

    /// Reveals a cell, flooding outwards from cells without adjacent mines.
    pub fn reveal(&mut self, coords: Coord2) -> Option<RevealResult> {
        let cell = self.playable_cell(coords)?;
        if cell.is_flagged {
            log::trace!("Reveal at {:?} rejected, cell is flagged", coords);
            return None;
        }
        let cell = self.ensure_mines(coords)?;

        let mut revealed = vec![self.reveal_cell(coords)];

        if cell.is_mine {
            self.triggered_mine = Some(coords);
            let flag_results = self.lose(&mut revealed);
            return Some(RevealResult {
                status: self.status,
                revealed_cells: revealed,
                flag_results: Some(flag_results),
            });
        }

        if cell.adjacent_mines == 0 {
            self.expand_cluster(coords, &mut revealed);
        }

        let flag_results = self.check_completion(&mut revealed);
        Some(RevealResult {
            status: self.status,
            revealed_cells: revealed,
            flag_results,
        })
    }

    /// Flags or unflags an unrevealed cell. Flagging the last unmarked cell ends the game.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Option<FlagResult> {
        self.playable_cell(coords)?;
        let cell = self.ensure_mines(coords)?;

        let is_flagged_now = !cell.is_flagged;
        self.board[coords].is_flagged = is_flagged_now;
        if is_flagged_now {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }

        let mut revealed = Vec::new();
        let flag_results = self.check_completion(&mut revealed);
        Some(FlagResult {
            is_flagged_now,
            status: self.status,
            revealed_cells: revealed,
            flag_results,
        })
    }

    /// Starts over with the same configuration. Mines have to be placed again.
    pub fn reset(&mut self) {
        for (_, cell) in self.board.iter_mut() {
            *cell = Cell::default();
        }
        self.status = GameStatus::Playing;
        self.mines_placed = false;
        self.revealed_count = 0;
        self.flagged_count = 0;
        self.triggered_mine = None;
        log::debug!("Game reset");
    }

    /// Current cell if a move there is allowed at all: game running, in bounds, not yet revealed.
    fn playable_cell(&self, coords: Coord2) -> Option<Cell> {
        if self.status.is_finished() {
            log::trace!("Move at {:?} rejected, game already ended", coords);
            return None;
        }

        let Some(&cell) = self.board.get(coords) else {
            log::trace!("Move at {:?} rejected, outside the board", coords);
            return None;
        };

        if cell.is_revealed {
            log::trace!("Move at {:?} rejected, cell already revealed", coords);
            return None;
        }

        Some(cell)
    }

    /// Places mines on first interaction when the caller skipped it, then returns the cell at `coords`.
    fn ensure_mines(&mut self, coords: Coord2) -> Option<Cell> {
        if !self.mines_placed {
            log::debug!("First move at {:?} before mines were placed, placing randomly", coords);
            if let Err(err) = self.place_mines() {
                log::warn!("Could not place mines: {}", err);
                return None;
            }
        }
        Some(self.board[coords])
    }

    fn reveal_cell(&mut self, coords: Coord2) -> RevealedCell {
        let cell = &mut self.board[coords];
        cell.is_revealed = true;
        self.revealed_count += 1;
        RevealedCell::new(coords, *cell)
    }

    /// Flood fill from a zero cell with an explicit stack.
    ///
    /// Diagonal neighbors are only opened when they are zero themselves, orthogonal neighbors always are.
    /// Flagged cells are never opened.
    fn expand_cluster(&mut self, origin: Coord2, revealed: &mut Vec<RevealedCell>) {
        let mut pending = vec![origin];

        while let Some(center) = pending.pop() {
            for direction in Direction::DIAGONALS {
                let Some(pos) = self.board.pos_in_direction(center, direction) else {
                    continue;
                };
                let cell = self.board[pos];
                if cell.is_hidden() && cell.adjacent_mines == 0 {
                    revealed.push(self.reveal_cell(pos));
                    pending.push(pos);
                }
            }

            for direction in Direction::ORTHOGONALS {
                let Some(pos) = self.board.pos_in_direction(center, direction) else {
                    continue;
                };
                let cell = self.board[pos];
                if cell.is_hidden() {
                    debug_assert!(!cell.is_mine, "zero cell next to a mine at {:?}", pos);
                    revealed.push(self.reveal_cell(pos));
                    if cell.adjacent_mines == 0 {
                        pending.push(pos);
                    }
                }
            }
        }

        log::trace!(
            "Flood fill from {:?} revealed {} cells",
            origin,
            revealed.len()
        );
    }

    /// Ends the game once every cell is revealed or flagged: won if the flags sit exactly on the mines, lost otherwise.
    fn check_completion(&mut self, revealed: &mut Vec<RevealedCell>) -> Option<Vec<FlagVerdict>> {
        if self.revealed_count + self.flagged_count < self.board.total_cells() {
            return None;
        }

        let flags_correct = self
            .board
            .iter()
            .all(|(_, cell)| cell.is_flagged == cell.is_mine);

        if flags_correct {
            self.status = GameStatus::Won;
            log::debug!("Game won");
            Some(self.flag_verdicts())
        } else {
            log::debug!("Board complete with misplaced flags");
            Some(self.lose(revealed))
        }
    }

    /// Switches to lost, uncovers every unflagged mine and grades every flag.
    ///
    /// Flagged mines stay flagged and unrevealed, they are reported through their `FlagVerdict` instead of
    /// `revealed`. Once the game is over `cell_view` exposes `is_mine` for them like for every other cell.
    fn lose(&mut self, revealed: &mut Vec<RevealedCell>) -> Vec<FlagVerdict> {
        self.status = GameStatus::Lost;

        for (coords, cell) in self.board.iter_mut() {
            if cell.is_mine && cell.is_hidden() {
                cell.is_revealed = true;
                self.revealed_count += 1;
                revealed.push(RevealedCell::new(coords, *cell));
            }
        }

        log::debug!("Game lost, triggered by {:?}", self.triggered_mine);
        self.flag_verdicts()
    }

    fn flag_verdicts(&self) -> Vec<FlagVerdict> {
        self.board
            .iter()
            .filter(|(_, cell)| cell.is_flagged)
            .map(|((x, y), cell)| FlagVerdict {
                x,
                y,
                correct: cell.is_mine,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn engine_with(size: Coord2, mines: &[Coord2]) -> Engine {
        let mut engine = Engine::create(size.0, size.1, mines.len() as CellCount).unwrap();
        engine.place_mines_at(mines).unwrap();
        engine
    }

    fn revealed_coords(result: &RevealResult) -> Vec<Coord2> {
        let mut coords: Vec<_> = result.revealed_cells.iter().map(RevealedCell::coords).collect();
        coords.sort_unstable();
        coords
    }

    #[test]
    fn create_rejects_full_board() {
        assert_eq!(
            Engine::create(3, 3, 9),
            Err(GameError::InvalidConfig(ConfigError::TooManyMines {
                mines: 9,
                cells: 9
            }))
        );
        assert!(matches!(
            Engine::create(0, 5, 1),
            Err(GameError::InvalidConfig(ConfigError::ZeroDimension { .. }))
        ));
    }

    #[test]
    fn new_starts_untouched() {
        let engine = Engine::new(Difficulty::Easy.config()).unwrap();

        assert_eq!(engine.status(), GameStatus::Playing);
        assert!(!engine.mines_placed());
        assert!(engine.board.iter().all(|(_, &cell)| cell == Cell::default()));
    }

    #[test]
    fn placing_mines_twice_fails() {
        let mut engine = Engine::create(4, 4, 3).unwrap();

        engine.place_mines_seeded(1).unwrap();
        assert_eq!(engine.place_mines_seeded(2), Err(GameError::AlreadyInitialized));
        assert_eq!(engine.place_mines(), Err(GameError::AlreadyInitialized));
    }

    #[test]
    fn fixed_layout_is_validated() {
        let mut engine = Engine::create(3, 3, 2).unwrap();

        assert_eq!(
            engine.place_mines_at(&[(0, 0)]),
            Err(GameError::MineCountMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            engine.place_mines_at(&[(0, 0), (3, 0)]),
            Err(GameError::InvalidCoords((3, 0)))
        );
        assert_eq!(
            engine.place_mines_at(&[(1, 1), (1, 1)]),
            Err(GameError::DuplicateMine((1, 1)))
        );
        assert!(!engine.mines_placed());
        assert!(engine.board.iter().all(|(_, cell)| !cell.is_mine));

        engine.place_mines_at(&[(0, 0), (2, 2)]).unwrap();
        assert_eq!(engine.board[(1, 1)].adjacent_mines, 2);
        assert_eq!(engine.board[(0, 1)].adjacent_mines, 1);
        assert_eq!(engine.board[(2, 0)].adjacent_mines, 0);
    }

    #[test]
    fn same_seed_gives_same_board() {
        let mut a = Engine::create(10, 10, 15).unwrap();
        let mut b = Engine::create(10, 10, 15).unwrap();

        a.place_mines_seeded(99).unwrap();
        b.place_mines_seeded(99).unwrap();

        assert_eq!(a.board, b.board);
    }

    #[test]
    fn zero_cell_cascades_over_whole_board() {
        let mut engine = engine_with((4, 4), &[(0, 0)]);

        let result = engine.reveal((3, 3)).unwrap();

        assert_eq!(result.status, GameStatus::Playing);
        assert_eq!(result.flag_results, None);
        assert_eq!(result.revealed_cells.len(), 15);
        assert!(result.revealed_cells.iter().all(|cell| !cell.is_mine));
        assert!(!revealed_coords(&result).contains(&(0, 0)));

        let near_mine = result
            .revealed_cells
            .iter()
            .find(|cell| cell.coords() == (1, 1))
            .unwrap();
        assert_eq!(near_mine.adjacent_mines, 1);
        assert_eq!(engine.cell_view((0, 0)).unwrap().is_mine, None);
    }

    #[test]
    fn numbered_cell_reveals_alone() {
        let mut engine = engine_with((4, 4), &[(0, 0)]);

        let result = engine.reveal((1, 1)).unwrap();

        assert_eq!(
            result.revealed_cells,
            vec![RevealedCell {
                x: 1,
                y: 1,
                is_mine: false,
                adjacent_mines: 1
            }]
        );
        assert_eq!(engine.revealed_count(), 1);
    }

    #[test]
    fn cluster_leaves_nonzero_diagonals_hidden() {
        let mut engine = engine_with((3, 3), &[(2, 1), (1, 2)]);

        let result = engine.reveal((0, 0)).unwrap();

        assert_eq!(revealed_coords(&result), vec![(0, 0), (0, 1), (1, 0)]);
        assert!(!engine.cell_view((1, 1)).unwrap().is_revealed);
    }

    #[test]
    fn cluster_wraps_around_corner_mines() {
        let mut engine = engine_with((5, 5), &[(4, 0), (0, 4)]);

        let result = engine.reveal((2, 2)).unwrap();
        let coords = revealed_coords(&result);

        assert_eq!(coords.len(), 23);
        assert!(coords.contains(&(3, 1)));
        assert!(coords.contains(&(1, 3)));
        assert!(!coords.contains(&(4, 0)));
        assert!(!coords.contains(&(0, 4)));
        assert_eq!(result.status, GameStatus::Playing);
    }

    #[test]
    fn cluster_skips_flags() {
        let mut engine = engine_with((4, 4), &[(0, 0)]);
        engine.toggle_flag((3, 0)).unwrap();

        let result = engine.reveal((3, 3)).unwrap();

        assert!(!revealed_coords(&result).contains(&(3, 0)));
        let view = engine.cell_view((3, 0)).unwrap();
        assert!(view.is_flagged);
        assert!(!view.is_revealed);
    }

    #[test]
    fn revealing_twice_is_rejected() {
        let mut engine = engine_with((4, 4), &[(0, 0)]);

        assert!(engine.reveal((1, 1)).is_some());
        assert_eq!(engine.reveal((1, 1)), None);
        assert_eq!(engine.revealed_count(), 1);
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut engine = engine_with((2, 2), &[(0, 0)]);

        assert_eq!(engine.reveal((2, 0)), None);
        assert_eq!(engine.toggle_flag((0, 2)), None);
        assert_eq!(engine.cell_view((5, 5)), None);
    }

    #[test]
    fn flag_blocks_reveal_until_removed() {
        let mut engine = engine_with((4, 4), &[(0, 0)]);

        let flagged = engine.toggle_flag((2, 2)).unwrap();
        assert!(flagged.is_flagged_now);
        assert_eq!(engine.reveal((2, 2)), None);

        let unflagged = engine.toggle_flag((2, 2)).unwrap();
        assert!(!unflagged.is_flagged_now);
        assert!(engine.reveal((2, 2)).is_some());
    }

    #[test]
    fn flagging_revealed_cell_is_rejected() {
        let mut engine = engine_with((4, 4), &[(0, 0)]);
        engine.reveal((1, 1)).unwrap();

        assert_eq!(engine.toggle_flag((1, 1)), None);
        assert!(!engine.cell_view((1, 1)).unwrap().is_flagged);
        assert_eq!(engine.flagged_count(), 0);
    }

    #[test]
    fn hitting_mine_loses_and_shows_all_mines() {
        let mut engine = engine_with((3, 3), &[(0, 0), (2, 0), (2, 2)]);
        engine.toggle_flag((2, 2)).unwrap();
        engine.toggle_flag((1, 1)).unwrap();

        let result = engine.reveal((0, 0)).unwrap();

        assert_eq!(result.status, GameStatus::Lost);
        assert_eq!(engine.triggered_mine(), Some((0, 0)));
        assert_eq!(revealed_coords(&result), vec![(0, 0), (2, 0)]);
        assert!(result.revealed_cells.iter().all(|cell| cell.is_mine));
        assert_eq!(
            result.flag_results,
            Some(vec![
                FlagVerdict {
                    x: 1,
                    y: 1,
                    correct: false
                },
                FlagVerdict {
                    x: 2,
                    y: 2,
                    correct: true
                },
            ])
        );
        assert_eq!(engine.cell_view((2, 0)).unwrap().is_mine, Some(true));
        assert_eq!(engine.cell_view((1, 0)).unwrap().is_mine, Some(false));
    }

    #[test]
    fn flagged_mine_stays_flagged_after_loss() {
        let mut engine = engine_with((3, 1), &[(0, 0), (2, 0)]);
        engine.toggle_flag((2, 0)).unwrap();

        let result = engine.reveal((0, 0)).unwrap();

        assert_eq!(result.status, GameStatus::Lost);
        assert_eq!(revealed_coords(&result), vec![(0, 0)]);
        assert_eq!(
            result.flag_results,
            Some(vec![FlagVerdict {
                x: 2,
                y: 0,
                correct: true
            }])
        );
        assert_eq!(
            engine.cell_view((2, 0)),
            Some(CellView {
                is_revealed: false,
                is_flagged: true,
                is_mine: Some(true),
                adjacent_mines: None,
            })
        );
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut engine = engine_with((3, 3), &[(0, 0)]);
        engine.reveal((0, 0)).unwrap();

        assert!(engine.is_finished());
        assert_eq!(engine.reveal((2, 2)), None);
        assert_eq!(engine.toggle_flag((2, 2)), None);
    }

    #[test]
    fn flagging_last_mine_wins() {
        let mut engine = engine_with((4, 4), &[(0, 0)]);
        engine.reveal((3, 3)).unwrap();

        let result = engine.toggle_flag((0, 0)).unwrap();

        assert_eq!(result.status, GameStatus::Won);
        assert_eq!(
            result.flag_results,
            Some(vec![FlagVerdict {
                x: 0,
                y: 0,
                correct: true
            }])
        );
        assert_eq!(engine.state().mines_remaining_guess, 0);
    }

    #[test]
    fn revealing_last_safe_cell_wins_when_mines_flagged() {
        let mut engine = engine_with((2, 1), &[(0, 0)]);
        engine.toggle_flag((0, 0)).unwrap();

        let result = engine.reveal((1, 0)).unwrap();

        assert_eq!(result.status, GameStatus::Won);
    }

    #[test]
    fn all_safe_cells_revealed_is_not_yet_a_win() {
        let mut engine = engine_with((2, 1), &[(0, 0)]);

        let result = engine.reveal((1, 0)).unwrap();

        assert_eq!(result.status, GameStatus::Playing);
        assert_eq!(engine.state().mines_remaining_guess, 1);
    }

    #[test]
    fn mine_free_board_wins_on_first_reveal() {
        let mut engine = engine_with((3, 2), &[]);

        let result = engine.reveal((0, 0)).unwrap();

        assert_eq!(result.status, GameStatus::Won);
        assert_eq!(result.revealed_cells.len(), 6);
        assert_eq!(result.flag_results, Some(vec![]));
    }

    #[test]
    fn completed_board_with_wrong_flag_loses() {
        let mut engine = engine_with((2, 2), &[(0, 0)]);
        engine.toggle_flag((1, 1)).unwrap();
        engine.reveal((1, 0)).unwrap();
        engine.reveal((0, 1)).unwrap();

        let result = engine.toggle_flag((0, 0)).unwrap();

        assert!(result.is_flagged_now);
        assert_eq!(result.status, GameStatus::Lost);
        assert!(result.revealed_cells.is_empty());
        assert_eq!(
            result.flag_results,
            Some(vec![
                FlagVerdict {
                    x: 0,
                    y: 0,
                    correct: true
                },
                FlagVerdict {
                    x: 1,
                    y: 1,
                    correct: false
                },
            ])
        );
        assert_eq!(engine.triggered_mine(), None);
    }

    #[test]
    fn mines_remaining_goes_negative_when_over_flagged() {
        let mut engine = engine_with((3, 3), &[(0, 0)]);
        engine.toggle_flag((1, 1)).unwrap();
        engine.toggle_flag((2, 2)).unwrap();

        assert_eq!(
            engine.state(),
            GameState {
                status: GameStatus::Playing,
                mines_remaining_guess: -1
            }
        );
    }

    #[test]
    fn first_move_places_mines_lazily() {
        let mut engine = Engine::create(5, 5, 4).unwrap();

        assert!(engine.reveal((2, 2)).is_some());
        assert!(engine.mines_placed());
        assert_eq!(engine.board.iter().filter(|(_, cell)| cell.is_mine).count(), 4);
        assert_eq!(engine.place_mines(), Err(GameError::AlreadyInitialized));
    }

    #[test]
    fn reset_clears_board() {
        let mut engine = engine_with((3, 3), &[(0, 0)]);
        engine.toggle_flag((2, 2)).unwrap();
        engine.reveal((0, 0)).unwrap();

        engine.reset();

        assert_eq!(engine.status(), GameStatus::Playing);
        assert_eq!(engine.flagged_count(), 0);
        assert_eq!(engine.revealed_count(), 0);
        assert_eq!(engine.triggered_mine(), None);
        assert!(engine.board.iter().all(|(_, &cell)| cell == Cell::default()));
        engine.place_mines_seeded(3).unwrap();
    }

    fn arb_board() -> impl Strategy<Value = (GameConfig, u64)> {
        (1u8..=12, 1u8..=12, any::<u16>(), any::<u64>()).prop_map(|(width, height, mines, seed)| {
            let mines = mines % mult(width, height);
            (GameConfig::new_unchecked(width, height, mines), seed)
        })
    }

    proptest! {
        #[test]
        fn placement_matches_adjacency((config, seed) in arb_board()) {
            let mut engine = Engine::new(config).unwrap();
            engine.place_mines_seeded(seed).unwrap();

            let mine_total = engine.board.iter().filter(|(_, cell)| cell.is_mine).count();
            prop_assert_eq!(mine_total, usize::from(config.mines));

            for (coords, cell) in engine.board.iter() {
                let expected = engine
                    .board
                    .neighbors_of(coords)
                    .filter(|&pos| engine.board[pos].is_mine)
                    .count();
                prop_assert_eq!(usize::from(cell.adjacent_mines), expected);
            }
        }

        #[test]
        fn cascade_stops_at_numbered_cells((config, seed) in arb_board()) {
            let mut engine = Engine::new(config).unwrap();
            engine.place_mines_seeded(seed).unwrap();

            let start = engine
                .board
                .iter()
                .find(|(_, cell)| !cell.is_mine && cell.adjacent_mines == 0)
                .map(|(coords, _)| coords);
            prop_assume!(start.is_some());
            let start = start.unwrap();

            let result = engine.reveal(start).unwrap();
            prop_assert_ne!(result.status, GameStatus::Lost);
            prop_assert!(result.revealed_cells.iter().all(|cell| !cell.is_mine));

            for (coords, cell) in engine.board.iter() {
                if !cell.is_revealed || cell.adjacent_mines != 0 {
                    continue;
                }
                for direction in Direction::ORTHOGONALS {
                    if let Some(pos) = engine.board.pos_in_direction(coords, direction) {
                        prop_assert!(engine.board[pos].is_revealed);
                    }
                }
                for direction in Direction::DIAGONALS {
                    if let Some(pos) = engine.board.pos_in_direction(coords, direction) {
                        let diagonal = engine.board[pos];
                        prop_assert!(diagonal.is_revealed || diagonal.adjacent_mines != 0);
                    }
                }
            }
        }
    }
}
