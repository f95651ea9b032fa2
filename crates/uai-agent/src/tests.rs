//! Integration tests for uai-agent.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use uai_behavior::{BehaviorBuilder, Consideration, ResponseCurve};
use uai_core::{AgentConfig, AgentId, BehaviorId, Tick, UaiError};
use uai_property::{PropertyKind, PropertySpec};

use crate::{Agent, AgentBuilder, AgentError, AgentObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn float(name: &str, value: f32, min: f32, max: f32) -> PropertySpec {
    PropertySpec::new(name, PropertyKind::Float).bounds(min, max).value(value)
}

/// Agent with `Health` (Float 0–100, value 80) and the given bonus.
fn soldier(bonus: f32) -> Agent {
    AgentBuilder::new("soldier")
        .commitment_bonus(bonus)
        .property(float("Health", 80.0, 0.0, 100.0))
        .build()
        .unwrap()
}

/// Register a behavior that reads `property` through the identity curve and
/// counts its executions.
fn tracked(agent: &mut Agent, name: &str, property: &str) -> (BehaviorId, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let b = agent
        .behavior(name)
        .consideration(Consideration::new(property, ResponseCurve::identity()))
        .action(move || counter.set(counter.get() + 1))
        .build()
        .unwrap();
    (agent.add_behavior(b).unwrap(), calls)
}

/// Agent with two unit-range Float properties `A` and `B` and one behavior
/// reading each.
fn duel(a: f32, b: f32, bonus: f32) -> (Agent, BehaviorId, BehaviorId) {
    let mut agent = AgentBuilder::new("duel")
        .commitment_bonus(bonus)
        .property(float("A", a, 0.0, 1.0))
        .property(float("B", b, 0.0, 1.0))
        .build()
        .unwrap();
    let (ba, _) = tracked(&mut agent, "DoA", "A");
    let (bb, _) = tracked(&mut agent, "DoB", "B");
    (agent, ba, bb)
}

// ── AgentBuilder ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_idle_agent_with_defaults() {
        let agent = AgentBuilder::new("idle").build().unwrap();
        assert_eq!(agent.id(), AgentId(0));
        assert_eq!(agent.name(), "idle");
        assert_eq!(agent.config(), &AgentConfig::default());
        assert_eq!(agent.current_behavior(), None);
        assert_eq!(agent.current_tick(), Tick::ZERO);
        assert!(agent.properties().is_empty());
    }

    #[test]
    fn negative_bonus_rejected() {
        let result = AgentBuilder::new("x").commitment_bonus(-0.1).build();
        assert!(matches!(result, Err(AgentError::Core(UaiError::Config(_)))));
    }

    #[test]
    fn non_finite_bonus_rejected() {
        for bonus in [f32::NAN, f32::INFINITY] {
            let result = AgentBuilder::new("x").commitment_bonus(bonus).build();
            assert!(matches!(result, Err(AgentError::Core(UaiError::Config(_)))));
        }
    }

    #[test]
    fn invalid_id_rejected() {
        let result = AgentBuilder::new("x").id(AgentId::INVALID).build();
        assert!(matches!(result, Err(AgentError::Config(_))));
    }

    #[test]
    fn zero_bonus_allowed() {
        assert!(AgentBuilder::new("x").commitment_bonus(0.0).build().is_ok());
    }

    #[test]
    fn properties_registered_in_order() {
        let agent = AgentBuilder::new("x")
            .property(float("Health", 50.0, 0.0, 100.0))
            .property(PropertySpec::new("Ammo", PropertyKind::Int).bounds(0.0, 6.0).value(6.0))
            .build()
            .unwrap();
        let names: Vec<&str> = agent.properties().iter().map(|(_, p)| p.name()).collect();
        assert_eq!(names, vec!["Health", "Ammo"]);
    }

    #[test]
    fn random_starts_reproducible() {
        let build = |id| {
            AgentBuilder::new("x")
                .id(AgentId(id))
                .seed(1234)
                .property(float("Morale", 0.0, 0.0, 100.0).random_start(10.0, 90.0))
                .build()
                .unwrap()
        };
        let a = build(7);
        let b = build(7);
        let va = a.properties().by_name("Morale").unwrap().raw_value();
        let vb = b.properties().by_name("Morale").unwrap().raw_value();
        assert_eq!(va, vb);
        assert!((10.0..=90.0).contains(&va));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn create_and_find() {
        let mut agent = soldier(0.1);
        let ammo = agent
            .create_property(&PropertySpec::new("Ammo", PropertyKind::Int).bounds(0.0, 6.0).value(3.0))
            .unwrap();
        assert_eq!(agent.find_property("Ammo"), Some(ammo));
        assert_eq!(agent.property(ammo).unwrap().as_int(), Some(3));
        assert_eq!(agent.find_property("Nope"), None);
    }

    #[test]
    fn set_value_clamps() {
        let mut agent = soldier(0.1);
        let hp = agent.find_property("Health").unwrap();
        agent.set_value(hp, 250.0).unwrap();
        assert_eq!(agent.property(hp).unwrap().as_float(), Some(100.0));
        agent.set_value(hp, -5.0).unwrap();
        assert_eq!(agent.property(hp).unwrap().as_float(), Some(0.0));
    }

    #[test]
    fn set_value_unknown_id_errors() {
        let mut agent = soldier(0.1);
        let err = agent.set_value(uai_core::PropertyId(99), 1.0).unwrap_err();
        assert!(matches!(err, AgentError::Core(UaiError::PropertyNotFound(_))));
    }

    #[test]
    fn set_value_by_name() {
        let mut agent = soldier(0.1);
        assert_eq!(agent.set_value_by_name("Health", 10.0), agent.find_property("Health"));
        assert_eq!(agent.set_value_by_name("Mana", 10.0), None);
        let hp = agent.properties().by_name("Health").unwrap();
        assert!(approx_eq(hp.normalized_value(), 0.1));
    }

    #[test]
    fn name_collision_keeps_id() {
        let mut agent = soldier(0.1);
        let before = agent.find_property("Health").unwrap();
        let after = agent.create_property(&float("Health", 5.0, 0.0, 10.0)).unwrap();
        assert_eq!(before, after);
        assert_eq!(agent.properties().len(), 1);
        assert!(approx_eq(agent.property(after).unwrap().normalized_value(), 0.5));
    }
}

// ── Behavior registration ─────────────────────────────────────────────────────

#[cfg(test)]
mod registration_tests {
    use super::*;

    #[test]
    fn ids_follow_registration_order() {
        let mut agent = soldier(0.1);
        let (a, _) = tracked(&mut agent, "A", "Health");
        let (b, _) = tracked(&mut agent, "B", "Health");
        assert_eq!(a, BehaviorId(0));
        assert_eq!(b, BehaviorId(1));
        assert_eq!(agent.behavior_count(), 2);
    }

    #[test]
    fn add_is_idempotent_by_name() {
        let mut agent = soldier(0.1);
        let (first, _) = tracked(&mut agent, "Attack", "Health");
        let again = agent.behavior("Attack").build().unwrap();
        assert_eq!(agent.add_behavior(again).unwrap(), first);
        assert_eq!(agent.behavior_count(), 1);
        // The first registration (with its consideration) is kept.
        assert_eq!(agent.get_behavior(first).unwrap().considerations().len(), 1);
    }

    #[test]
    fn foreign_behavior_rejected() {
        let mut agent = soldier(0.1);
        let stranger = BehaviorBuilder::new("Sneak").owner(AgentId(5)).build().unwrap();
        let err = agent.add_behavior(stranger).unwrap_err();
        assert!(matches!(
            err,
            AgentError::ForeignBehavior { owner: AgentId(5), agent: AgentId(0), .. }
        ));
        assert_eq!(agent.behavior_count(), 0);
    }

    #[test]
    fn builder_is_prebound() {
        let agent = AgentBuilder::new("x").id(AgentId(3)).build().unwrap();
        let b = agent.behavior("Wait").build().unwrap();
        assert_eq!(b.owner(), AgentId(3));
    }

    #[test]
    fn considerations_resolved_on_first_tick() {
        let mut agent = soldier(0.1);
        let b = agent
            .behavior("Mixed")
            .consideration(Consideration::new("Health", ResponseCurve::identity()))
            .consideration(Consideration::new("Helth", ResponseCurve::identity()))
            .build()
            .unwrap();
        let id = agent.add_behavior(b).unwrap();
        let cs = agent.get_behavior(id).unwrap().considerations();
        assert!(cs.iter().all(|c| c.property().is_none() && !c.is_unresolvable()));

        agent.tick();
        let cs = agent.get_behavior(id).unwrap().considerations();
        assert_eq!(cs[0].property(), agent.find_property("Health"));
        assert!(cs[1].is_unresolvable());
    }

    #[test]
    fn typo_does_not_break_agent() {
        let mut agent = soldier(0.1);
        let b = agent
            .behavior("Broken")
            .consideration(Consideration::new("Helth", ResponseCurve::constant(1.0)))
            .build()
            .unwrap();
        agent.add_behavior(b).unwrap();
        let (attack, _) = tracked(&mut agent, "Attack", "Health");
        assert_eq!(agent.tick(), Some(attack));
    }

    #[test]
    fn remove_leaves_slot_and_clears_current() {
        let mut agent = soldier(0.1);
        let (a, _) = tracked(&mut agent, "A", "Health");
        assert_eq!(agent.tick(), Some(a));

        let removed = agent.remove_behavior(a).unwrap();
        assert_eq!(removed.name(), "A");
        assert_eq!(agent.current_behavior(), None);
        assert!(agent.get_behavior(a).is_none());
        assert!(agent.remove_behavior(a).is_none());

        let (b, _) = tracked(&mut agent, "B", "Health");
        assert_eq!(b, BehaviorId(1));
        assert_eq!(agent.tick(), Some(b));
    }

    #[test]
    fn find_behavior_skips_removed() {
        let mut agent = soldier(0.1);
        let (a, _) = tracked(&mut agent, "A", "Health");
        agent.remove_behavior(a);
        assert_eq!(agent.find_behavior("A"), None);
        let (again, _) = tracked(&mut agent, "A", "Health");
        assert_eq!(agent.find_behavior("A"), Some(again));
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[test]
    fn flee_or_attack_by_health() {
        let mut agent = soldier(0.1);
        let flee = agent
            .behavior("Flee")
            .consideration(Consideration::new("Health", ResponseCurve::inverse()))
            .build()
            .unwrap();
        let attack = agent
            .behavior("Attack")
            .consideration(Consideration::new("Health", ResponseCurve::identity()))
            .build()
            .unwrap();
        let flee = agent.add_behavior(flee).unwrap();
        let attack = agent.add_behavior(attack).unwrap();

        let scores = agent.scores();
        assert!(approx_eq(scores[0].1, 0.2));
        assert!(approx_eq(scores[1].1, 0.8));
        assert_eq!(agent.tick(), Some(attack));

        agent.set_value_by_name("Health", 10.0);
        let scores = agent.scores();
        assert!(approx_eq(scores[0].1, 0.9));
        assert!(approx_eq(scores[1].1, 0.1));
        assert_eq!(agent.tick(), Some(flee));
    }

    #[test]
    fn commitment_bonus_holds_active() {
        let (mut agent, a, b) = duel(0.5, 0.2, 0.1);
        assert_eq!(agent.tick(), Some(a));

        // 0.5 + 0.1 = 0.6 > 0.55
        agent.set_value_by_name("B", 0.55);
        assert_eq!(agent.tick(), Some(a));

        // 0.61 > 0.6
        agent.set_value_by_name("B", 0.61);
        assert_eq!(agent.tick(), Some(b));

        // Now B holds: 0.61 + 0.1 > 0.65
        agent.set_value_by_name("A", 0.65);
        assert_eq!(agent.tick(), Some(b));
    }

    #[test]
    fn zero_bonus_switches_immediately() {
        let (mut agent, a, b) = duel(0.5, 0.2, 0.0);
        assert_eq!(agent.tick(), Some(a));
        agent.set_value_by_name("B", 0.55);
        assert_eq!(agent.tick(), Some(b));
    }

    #[test]
    fn tie_goes_to_first_registered() {
        let (mut agent, a, _) = duel(0.4, 0.4, 0.0);
        for _ in 0..5 {
            assert_eq!(agent.tick(), Some(a));
        }
    }

    #[test]
    fn tie_selection_is_reproducible() {
        let run = || {
            let (mut agent, _, _) = duel(0.4, 0.4, 0.0);
            (0..3).map(|_| agent.tick()).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn all_zero_selects_nothing() {
        let (mut agent, _, _) = duel(0.0, 0.0, 0.1);
        assert_eq!(agent.tick(), None);
        assert_eq!(agent.tick(), None);
    }

    #[test]
    fn all_zero_keeps_previous() {
        let (mut agent, a, _) = duel(0.3, 0.1, 0.0);
        assert_eq!(agent.tick(), Some(a));
        agent.set_value_by_name("A", 0.0);
        agent.set_value_by_name("B", 0.0);
        assert_eq!(agent.tick(), Some(a));
    }

    #[test]
    fn no_behaviors_selects_nothing() {
        let mut agent = soldier(0.1);
        assert_eq!(agent.tick(), None);
        assert_eq!(agent.current_tick(), Tick(1));
    }

    #[test]
    fn action_fires_every_tick_while_active() {
        let mut agent = soldier(0.1);
        let (_, calls) = tracked(&mut agent, "Attack", "Health");
        for _ in 0..4 {
            agent.tick();
        }
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn only_active_action_fires() {
        let mut agent = AgentBuilder::new("x")
            .property(float("A", 0.9, 0.0, 1.0))
            .property(float("B", 0.1, 0.0, 1.0))
            .build()
            .unwrap();
        let (_, a_calls) = tracked(&mut agent, "DoA", "A");
        let (_, b_calls) = tracked(&mut agent, "DoB", "B");
        agent.tick();
        agent.tick();
        assert_eq!(a_calls.get(), 2);
        assert_eq!(b_calls.get(), 0);
    }

    #[test]
    fn action_keeps_firing_when_scores_drop_to_zero() {
        let mut agent = soldier(0.0);
        let (attack, calls) = tracked(&mut agent, "Attack", "Health");
        agent.tick();
        agent.set_value_by_name("Health", 0.0);
        assert_eq!(agent.tick(), Some(attack));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn scores_do_not_change_selection() {
        let (mut agent, _, _) = duel(0.5, 0.2, 0.1);
        let scores = agent.scores();
        assert_eq!(scores.len(), 2);
        assert_eq!(agent.current_behavior(), None);
        assert_eq!(agent.current_tick(), Tick::ZERO);
    }

    #[test]
    fn late_registration_competes_next_tick() {
        let (mut agent, a, _) = duel(0.5, 0.2, 0.1);
        assert_eq!(agent.tick(), Some(a));
        let c = agent
            .behavior("Rally")
            .consideration(Consideration::new("A", ResponseCurve::constant(1.0)))
            .build()
            .unwrap();
        let c = agent.add_behavior(c).unwrap();
        assert_eq!(agent.tick(), Some(c));
    }

    #[test]
    fn behavior_added_before_its_property() {
        let mut agent = AgentBuilder::new("x").build().unwrap();
        let attack = agent
            .behavior("Attack")
            .consideration(Consideration::new("Health", ResponseCurve::identity()))
            .build()
            .unwrap();
        let attack = agent.add_behavior(attack).unwrap();
        agent.create_property(&float("Health", 80.0, 0.0, 100.0)).unwrap();

        assert_eq!(agent.tick(), Some(attack));
        assert!(approx_eq(agent.scores()[0].1, 0.8));
    }

    #[test]
    fn property_missing_at_first_tick_stays_disabled() {
        let mut agent = AgentBuilder::new("x").build().unwrap();
        let b = agent
            .behavior("Early")
            .consideration(Consideration::new("Late", ResponseCurve::identity()))
            .build()
            .unwrap();
        agent.add_behavior(b).unwrap();
        assert_eq!(agent.tick(), None);

        agent.create_property(&float("Late", 1.0, 0.0, 1.0)).unwrap();
        assert_eq!(agent.tick(), None);
    }

    #[test]
    fn tick_counter_advances() {
        let mut agent = soldier(0.1);
        for _ in 0..3 {
            agent.tick();
        }
        assert_eq!(agent.current_tick(), Tick(3));
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        starts:  Vec<Tick>,
        scored:  Vec<(Tick, String, f32)>,
        changes: Vec<(Tick, Option<BehaviorId>, BehaviorId)>,
        ends:    Vec<(Tick, Option<BehaviorId>)>,
    }

    impl AgentObserver for Recorder {
        fn on_tick_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }
        fn on_behavior_scored(&mut self, tick: Tick, _id: BehaviorId, name: &str, score: f32) {
            self.scored.push((tick, name.to_owned(), score));
        }
        fn on_selection_changed(&mut self, tick: Tick, from: Option<BehaviorId>, to: BehaviorId) {
            self.changes.push((tick, from, to));
        }
        fn on_tick_end(&mut self, tick: Tick, active: Option<BehaviorId>) {
            self.ends.push((tick, active));
        }
    }

    #[test]
    fn hooks_fire_in_order() {
        let (mut agent, a, b) = duel(0.5, 0.2, 0.1);
        let mut rec = Recorder::default();

        agent.tick_with(&mut rec);
        agent.set_value_by_name("B", 0.9);
        agent.tick_with(&mut rec);
        agent.tick_with(&mut rec);

        assert_eq!(rec.starts, vec![Tick(0), Tick(1), Tick(2)]);
        assert_eq!(rec.scored.len(), 6);
        assert_eq!(rec.changes, vec![(Tick(0), None, a), (Tick(1), Some(a), b)]);
        assert_eq!(rec.ends, vec![(Tick(0), Some(a)), (Tick(1), Some(b)), (Tick(2), Some(b))]);
    }

    #[test]
    fn reported_score_includes_bonus() {
        let (mut agent, _, _) = duel(0.5, 0.2, 0.1);
        let mut rec = Recorder::default();
        agent.tick_with(&mut rec);
        agent.tick_with(&mut rec);
        // Second tick: DoA is active.
        let (_, ref name, score) = rec.scored[2];
        assert_eq!(name, "DoA");
        assert!(approx_eq(score, 0.6));
    }

    #[test]
    fn removed_behaviors_not_reported() {
        let (mut agent, a, _) = duel(0.5, 0.2, 0.1);
        agent.remove_behavior(a);
        let mut rec = Recorder::default();
        agent.tick_with(&mut rec);
        assert_eq!(rec.scored.len(), 1);
        assert_eq!(rec.scored[0].1, "DoB");
    }

    #[test]
    fn observer_sees_action_effects_before_end() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut agent = soldier(0.1);
        let sink = Rc::clone(&log);
        let b = agent
            .behavior("Attack")
            .consideration(Consideration::new("Health", ResponseCurve::identity()))
            .action(move || sink.borrow_mut().push("fire"))
            .build()
            .unwrap();
        agent.add_behavior(b).unwrap();

        struct EndMarker(Rc<RefCell<Vec<&'static str>>>);
        impl AgentObserver for EndMarker {
            fn on_tick_end(&mut self, _tick: Tick, _active: Option<BehaviorId>) {
                self.0.borrow_mut().push("end");
            }
        }
        agent.tick_with(&mut EndMarker(Rc::clone(&log)));
        assert_eq!(*log.borrow(), vec!["fire", "end"]);
    }
}
