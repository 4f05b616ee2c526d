use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::dist::{categorical::Categorical, dirac::Dirac, distribution::Distribution};
use crate::mdp::{error::IndexError, initial::InitialState, process::Mdp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Room {
    Hall,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Stay,
    Leave,
}

/// Two-room process: leaving the hall usually works and pays on arrival.
struct Hallway;

impl Mdp for Hallway {
    type State = Room;
    type Action = Move;
    type Transition = Categorical<Room>;
    type Initial = Categorical<Room>;

    fn discount(&self) -> f64 {
        0.9
    }

    /// Terminal states self-absorb.
    fn transition(&self, state: &Room, action: &Move) -> Categorical<Room> {
        match (state, action) {
            (Room::Hall, Move::Leave) => {
                Categorical::new(vec![Room::Exit, Room::Hall], vec![0.8, 0.2])
                    .expect("weights form a law")
            }
            (Room::Hall, Move::Stay) => Categorical::point(Room::Hall),
            (Room::Exit, _) => Categorical::point(Room::Exit),
        }
    }

    fn reward(&self, state: &Room, action: &Move, next: &Room) -> f64 {
        match (state, action, next) {
            (Room::Hall, Move::Leave, Room::Exit) => 10.0,
            _ => 0.0,
        }
    }

    fn is_terminal(&self, state: &Room) -> bool {
        matches!(state, Room::Exit)
    }

    fn initial_state(&self) -> InitialState<Room, Categorical<Room>> {
        InitialState::Fixed(Room::Hall)
    }

    fn state_index(&self, state: &Room) -> Result<usize, IndexError> {
        Ok(match state {
            Room::Hall => 0,
            Room::Exit => 1,
        })
    }

    fn action_index(&self, action: &Move) -> Result<usize, IndexError> {
        Ok(match action {
            Move::Stay => 0,
            Move::Leave => 1,
        })
    }
}

/// Deterministic drift on the real line; neither space has a dense index.
struct DriftLine {
    threshold: f64,
}

impl Mdp for DriftLine {
    type State = f64;
    type Action = f64;
    type Transition = Dirac<f64>;
    type Initial = Dirac<f64>;

    fn discount(&self) -> f64 {
        1.0
    }

    /// Terminal states self-absorb; otherwise the push is applied exactly.
    fn transition(&self, state: &f64, action: &f64) -> Dirac<f64> {
        if self.is_terminal(state) {
            return Dirac::new(*state);
        }
        Dirac::new(state + action)
    }

    fn reward(&self, _state: &f64, action: &f64, _next: &f64) -> f64 {
        -action.abs()
    }

    fn is_terminal(&self, state: &f64) -> bool {
        state.abs() >= self.threshold
    }

    fn initial_state(&self) -> InitialState<f64, Dirac<f64>> {
        InitialState::Random(Dirac::new(0.0))
    }

    fn state_index(&self, _state: &f64) -> Result<usize, IndexError> {
        Err(IndexError::StateSpaceNotDiscrete)
    }

    fn action_index(&self, _action: &f64) -> Result<usize, IndexError> {
        Err(IndexError::ActionSpaceNotDiscrete)
    }
}

#[test]
fn discount_is_stable_across_reads() {
    let process = Hallway;

    assert_eq!(process.discount(), process.discount());
    assert_eq!(process.discount(), 0.9);
}

#[test]
fn transition_is_a_pure_function_of_its_arguments() {
    let process = Hallway;

    let first = process.transition(&Room::Hall, &Move::Leave);
    let second = process.transition(&Room::Hall, &Move::Leave);

    for state in first.support() {
        assert_eq!(first.pdf(&state), second.pdf(&state));
    }
}

#[test]
fn reward_is_finite_for_zero_probability_triples() {
    let process = Hallway;

    // Staying never reaches the exit, but the query must still answer.
    let reward = process.reward(&Room::Hall, &Move::Stay, &Room::Exit);

    assert!(reward.is_finite());
    assert_eq!(reward, 0.0);
}

#[test]
fn is_terminal_is_deterministic() {
    let process = Hallway;

    for _ in 0..3 {
        assert!(!process.is_terminal(&Room::Hall));
        assert!(process.is_terminal(&Room::Exit));
    }
}

#[test]
fn state_indices_are_dense_and_injective() {
    let process = Hallway;

    let mut indices: Vec<usize> = [Room::Hall, Room::Exit]
        .iter()
        .map(|state| process.state_index(state).expect("discrete model"))
        .collect();
    indices.sort_unstable();

    assert_eq!(indices, vec![0, 1]);
}

#[test]
fn terminal_states_self_absorb() {
    let process = Hallway;

    let dist = process.transition(&Room::Exit, &Move::Leave);

    assert_eq!(dist.pdf(&Room::Exit), 1.0);
    assert_eq!(dist.pdf(&Room::Hall), 0.0);
}

#[test]
fn fixed_initial_state_realizes_to_itself() {
    let process = Hallway;
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let initial = process.initial_state();

    assert_eq!(initial.fixed(), Some(&Room::Hall));
    assert_eq!(initial.realize(&mut rng), Room::Hall);
}

#[test]
fn random_initial_state_must_be_drawn() {
    let process = DriftLine { threshold: 10.0 };
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let initial = process.initial_state();

    assert_eq!(initial.fixed(), None);
    assert_eq!(initial.realize(&mut rng), 0.0);
}

#[test]
fn continuous_spaces_fail_index_lookups_explicitly() {
    let process = DriftLine { threshold: 10.0 };

    // An error, never a sentinel index.
    assert_eq!(
        process.state_index(&0.5),
        Err(IndexError::StateSpaceNotDiscrete)
    );
    assert_eq!(
        process.action_index(&0.5),
        Err(IndexError::ActionSpaceNotDiscrete)
    );
}

#[test]
fn drift_transition_is_exact_until_terminal() {
    let process = DriftLine { threshold: 2.0 };

    let dist = process.transition(&1.0, &0.5);
    assert_eq!(dist.pdf(&1.5), 1.0);

    let absorbed = process.transition(&2.5, &0.5);
    assert_eq!(absorbed.pdf(&2.5), 1.0);
}
