//! End-to-end transition scenarios.

use nested_state::core::State;
use nested_state::{MachineConfig, MachineError, StateMachine};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tree {
    A,
    B,
    C,
    D,
}

#[derive(Default)]
struct Hooks {
    entered: Vec<Tree>,
    exited: Vec<Tree>,
}

impl State for Tree {
    type Context = Hooks;

    fn name(&self) -> &str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }

    fn super_state(&self) -> Option<Self> {
        match self {
            Self::A => None,
            Self::B => Some(Self::A),
            Self::C => Some(Self::B),
            Self::D => Some(Self::A),
        }
    }

    fn on_enter(&self, _machine: &mut StateMachine<Self>, hooks: &mut Hooks) {
        hooks.entered.push(*self);
    }

    fn on_exit(&self, _machine: &mut StateMachine<Self>, hooks: &mut Hooks) {
        hooks.exited.push(*self);
    }
}

#[test]
fn least_common_ancestor_walkthrough() {
    let mut machine: StateMachine<Tree> = StateMachine::new();
    let mut hooks = Hooks::default();

    machine.goto(Tree::C, &mut hooks).unwrap();
    assert_eq!(hooks.entered, [Tree::A, Tree::B, Tree::C]);
    assert!(hooks.exited.is_empty());
    assert_eq!(machine.top(), Some(Tree::C));

    let mut hooks = Hooks::default();
    machine.goto(Tree::A, &mut hooks).unwrap();
    assert_eq!(hooks.exited, [Tree::C, Tree::B]);
    assert!(hooks.entered.is_empty());
    assert_eq!(machine.top(), Some(Tree::A));
    assert!(!machine.is_in(Tree::B));
    assert!(!machine.is_in(Tree::C));

    let mut hooks = Hooks::default();
    machine.goto(Tree::D, &mut hooks).unwrap();
    assert!(hooks.exited.is_empty());
    assert_eq!(hooks.entered, [Tree::D]);
    assert_eq!(machine.top(), Some(Tree::D));
}

#[test]
fn capacity_overflow_is_partial_not_rolled_back() {
    let config = MachineConfig::builder().max_depth(2).build().unwrap();
    let mut machine: StateMachine<Tree> = StateMachine::with_config(config).unwrap();
    let mut hooks = Hooks::default();

    let err = machine.goto(Tree::C, &mut hooks).unwrap_err();

    assert!(matches!(err, MachineError::CapacityExceeded { max_depth: 2, .. }));
    assert_eq!(err.error_code(), -12);
    assert_eq!(hooks.entered, [Tree::A, Tree::B]);
    assert_eq!(machine.path(), &[Tree::A, Tree::B]);
    assert_eq!(machine.top(), Some(Tree::B));
}

/// One link in a long acyclic chain: `Rung(n)` sits under `Rung(n - 1)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Rung(u32);

impl State for Rung {
    type Context = Vec<u32>;

    fn name(&self) -> &str {
        "rung"
    }

    fn super_state(&self) -> Option<Self> {
        self.0.checked_sub(1).map(Rung)
    }

    fn on_enter(&self, _machine: &mut StateMachine<Self>, entered: &mut Vec<u32>) {
        entered.push(self.0);
    }
}

#[test]
fn deep_chain_on_bounded_machine_installs_root_most_rungs() {
    let mut machine: StateMachine<Rung> = StateMachine::new();
    let mut entered = Vec::new();

    let err = machine.goto(Rung(20_000), &mut entered).unwrap_err();

    assert_eq!(
        err,
        MachineError::CapacityExceeded {
            state: "rung".to_string(),
            max_depth: 7,
        }
    );
    assert_eq!(entered, (0..7).collect::<Vec<_>>());
    assert_eq!(machine.path(), (0..7).map(Rung).collect::<Vec<_>>().as_slice());
    assert!(machine.is_consistent());
}

#[test]
fn unbounded_machine_enters_deep_chains() {
    let mut machine: StateMachine<Tree> = StateMachine::unbounded();
    let mut hooks = Hooks::default();

    machine.goto(Tree::C, &mut hooks).unwrap();

    assert_eq!(machine.depth(), 3);
    assert!(machine.is_consistent());
}

#[test]
fn config_loaded_from_json_bounds_the_machine() {
    let config: MachineConfig = serde_json::from_str(r#"{"max_depth": {"bounded": 1}}"#).unwrap();
    let mut machine: StateMachine<Tree> = StateMachine::with_config(config).unwrap();

    assert!(machine.jump(Tree::D).is_err());
    assert_eq!(machine.path(), &[Tree::A]);

    let config: MachineConfig = serde_json::from_str(r#"{"max_depth": {"bounded": 0}}"#).unwrap();
    assert!(StateMachine::<Tree>::with_config(config).is_err());
}

mod ignition {
    //! A starter sequence whose `Starting` enter hook immediately moves on to
    //! `Igniting`, and whose cycle handlers step through cranking to running.

    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Engine {
        Stopped,
        Starting,
        Igniting,
        Cranking,
        Running,
    }

    #[derive(Default)]
    struct Sequencer {
        igniting: u32,
        cranking: u32,
        events: Vec<String>,
    }

    impl State for Engine {
        type Context = Sequencer;

        fn name(&self) -> &str {
            match self {
                Self::Stopped => "Stopped",
                Self::Starting => "Starting",
                Self::Igniting => "Igniting",
                Self::Cranking => "Cranking",
                Self::Running => "Running",
            }
        }

        fn super_state(&self) -> Option<Self> {
            match self {
                Self::Igniting | Self::Cranking => Some(Self::Starting),
                _ => None,
            }
        }

        fn on_enter(&self, machine: &mut StateMachine<Self>, seq: &mut Sequencer) {
            seq.events.push(format!("enter {}", self.name()));
            match self {
                Self::Starting => {
                    machine.goto(Self::Igniting, seq).unwrap();
                }
                Self::Igniting => seq.igniting = 1,
                Self::Cranking => seq.cranking = 2,
                _ => {}
            }
        }

        fn on_exit(&self, _machine: &mut StateMachine<Self>, seq: &mut Sequencer) {
            seq.events.push(format!("exit {}", self.name()));
        }
    }

    fn start(machine: &mut StateMachine<Engine>, seq: &mut Sequencer) {
        if machine.is_in(Engine::Stopped) {
            machine.goto(Engine::Starting, seq).unwrap();
        }
    }

    fn stop(machine: &mut StateMachine<Engine>, seq: &mut Sequencer) {
        machine.goto(Engine::Stopped, seq).unwrap();
    }

    fn cycle(machine: &mut StateMachine<Engine>, seq: &mut Sequencer) {
        match machine.top() {
            Some(Engine::Igniting) => {
                seq.igniting -= 1;
                if seq.igniting == 0 {
                    machine.goto(Engine::Cranking, seq).unwrap();
                }
            }
            Some(Engine::Cranking) => {
                seq.cranking -= 1;
                if seq.cranking == 0 {
                    machine.goto(Engine::Running, seq).unwrap();
                }
            }
            _ => {}
        }
    }

    #[test]
    fn start_sequence_runs_through_reentrant_hooks() {
        let mut machine: StateMachine<Engine> = StateMachine::new();
        let mut seq = Sequencer::default();

        machine.init();
        machine.goto(Engine::Stopped, &mut seq).unwrap();
        assert!(machine.is_in(Engine::Stopped));

        start(&mut machine, &mut seq);
        assert!(machine.is_in(Engine::Starting));
        assert!(machine.is_in(Engine::Igniting));
        assert_eq!(machine.path(), &[Engine::Starting, Engine::Igniting]);

        cycle(&mut machine, &mut seq);
        assert!(machine.is_in(Engine::Starting));
        assert!(machine.is_in(Engine::Cranking));

        cycle(&mut machine, &mut seq);
        assert!(machine.is_in(Engine::Starting));
        assert!(machine.is_in(Engine::Cranking));

        cycle(&mut machine, &mut seq);
        assert!(machine.is_in(Engine::Running));
        assert!(!machine.is_in(Engine::Starting));

        stop(&mut machine, &mut seq);
        assert!(machine.is_in(Engine::Stopped));
        assert!(machine.is_consistent());

        assert_eq!(
            seq.events,
            [
                "enter Stopped",
                "exit Stopped",
                "enter Starting",
                "enter Igniting",
                "exit Igniting",
                "enter Cranking",
                "exit Cranking",
                "exit Starting",
                "enter Running",
                "exit Running",
                "enter Stopped",
            ]
        );
    }

    #[test]
    fn start_is_ignored_unless_stopped() {
        let mut machine: StateMachine<Engine> = StateMachine::new();
        let mut seq = Sequencer::default();
        machine.jump(Engine::Running).unwrap();

        start(&mut machine, &mut seq);

        assert_eq!(machine.top(), Some(Engine::Running));
        assert!(seq.events.is_empty());
    }
}

mod reentrancy_hazard {
    //! A hook that leaves the path the outer transition is still entering.

    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Node {
        Outer,
        Middle,
        Inner,
        Elsewhere,
    }

    impl State for Node {
        type Context = Vec<String>;

        fn name(&self) -> &str {
            match self {
                Self::Outer => "Outer",
                Self::Middle => "Middle",
                Self::Inner => "Inner",
                Self::Elsewhere => "Elsewhere",
            }
        }

        fn super_state(&self) -> Option<Self> {
            match self {
                Self::Middle => Some(Self::Outer),
                Self::Inner => Some(Self::Middle),
                _ => None,
            }
        }

        fn on_enter(&self, machine: &mut StateMachine<Self>, log: &mut Vec<String>) {
            log.push(format!("enter {}", self.name()));
            if *self == Self::Middle {
                machine.goto(Self::Elsewhere, log).unwrap();
            }
        }

        fn on_exit(&self, _machine: &mut StateMachine<Self>, log: &mut Vec<String>) {
            log.push(format!("exit {}", self.name()));
        }
    }

    #[test]
    fn outer_transition_keeps_entering_its_snapshot() {
        let mut machine: StateMachine<Node> = StateMachine::unbounded();
        let mut log = Vec::new();

        machine.goto(Node::Inner, &mut log).unwrap();

        assert_eq!(
            log,
            [
                "enter Outer",
                "enter Middle",
                "exit Middle",
                "exit Outer",
                "enter Elsewhere",
                "enter Inner",
            ]
        );
        assert_eq!(machine.path(), &[Node::Elsewhere, Node::Inner]);
        assert!(!machine.is_consistent());
    }
}
