use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use chainwise_core::{Categorical, Distribution, IndexError, InitialState, Mdp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Near,
    Goal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Left,
    Right,
}

struct MiniGrid {
    start: InitialShape,
}

enum InitialShape {
    Known,
    Drawn,
}

impl Mdp for MiniGrid {
    type State = Tile;
    type Action = Step;
    type Transition = Categorical<Tile>;
    type Initial = Categorical<Tile>;

    fn discount(&self) -> f64 {
        0.9
    }

    /// Terminal states self-absorb.
    fn transition(&self, state: &Tile, action: &Step) -> Categorical<Tile> {
        match (state, action) {
            (Tile::Near, Step::Right) => Categorical::point(Tile::Goal),
            (Tile::Near, Step::Left) => Categorical::point(Tile::Near),
            (Tile::Goal, _) => Categorical::point(Tile::Goal),
        }
    }

    fn reward(&self, state: &Tile, action: &Step, next: &Tile) -> f64 {
        match (state, action, next) {
            (Tile::Near, Step::Right, Tile::Goal) => 10.0,
            _ => 0.0,
        }
    }

    fn is_terminal(&self, state: &Tile) -> bool {
        matches!(state, Tile::Goal)
    }

    fn initial_state(&self) -> InitialState<Tile, Categorical<Tile>> {
        match self.start {
            InitialShape::Known => InitialState::Fixed(Tile::Near),
            InitialShape::Drawn => InitialState::Random(
                Categorical::uniform_over(vec![Tile::Near, Tile::Goal])
                    .expect("non-empty values"),
            ),
        }
    }

    fn state_index(&self, state: &Tile) -> Result<usize, IndexError> {
        Ok(match state {
            Tile::Near => 0,
            Tile::Goal => 1,
        })
    }

    fn action_index(&self, action: &Step) -> Result<usize, IndexError> {
        Ok(match action {
            Step::Left => 0,
            Step::Right => 1,
        })
    }
}

#[test]
fn one_step_expected_reward_matches_hand_computation() {
    let process = MiniGrid {
        start: InitialShape::Known,
    };

    let dist = process.transition(&Tile::Near, &Step::Right);
    let expected: f64 = dist
        .support()
        .map(|next| dist.pdf(&next) * process.reward(&Tile::Near, &Step::Right, &next))
        .sum();

    assert_eq!(expected, 10.0);
    assert_eq!(dist.pdf(&Tile::Goal), 1.0);
}

#[test]
fn both_initial_state_shapes_are_consumable() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);

    let known = MiniGrid {
        start: InitialShape::Known,
    };
    match known.initial_state() {
        InitialState::Fixed(state) => assert_eq!(state, Tile::Near),
        InitialState::Random(_) => panic!("declared a fixed start"),
    }

    let drawn = MiniGrid {
        start: InitialShape::Drawn,
    };
    match drawn.initial_state() {
        InitialState::Fixed(_) => panic!("declared a drawn start"),
        InitialState::Random(dist) => {
            let state = dist.sample(&mut rng);
            assert!(dist.pdf(&state) > 0.0);
        }
    }
}

#[test]
fn dense_indices_cover_the_state_and_action_spaces() {
    let process = MiniGrid {
        start: InitialShape::Known,
    };

    let states: Vec<usize> = [Tile::Near, Tile::Goal]
        .iter()
        .map(|state| process.state_index(state).expect("discrete model"))
        .collect();
    let actions: Vec<usize> = [Step::Left, Step::Right]
        .iter()
        .map(|action| process.action_index(action).expect("discrete model"))
        .collect();

    assert_eq!(states, vec![0, 1]);
    assert_eq!(actions, vec![0, 1]);
}
