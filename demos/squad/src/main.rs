//! squad — a small fire team driven by the utility-AI decision engine.
//!
//! Four soldiers share one JSON configuration (properties, behaviors and
//! response curves) but roll their own start values.  Each tick the world
//! throws incoming fire and enemy sightings at them, every soldier picks a
//! behavior, and the chosen behavior's order is applied back to its
//! properties before the next tick.
//!
//! Run with `RUST_LOG=uai_agent=debug` to see every behavior switch.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::info;

use uai_agent::{Agent, AgentBuilder, AgentObserver};
use uai_behavior::{Consideration, ResponseCurve};
use uai_core::{AgentConfig, AgentId, AgentRng, BehaviorId, Tick};
use uai_property::PropertySpec;

// ── Constants ─────────────────────────────────────────────────────────────────

const SQUAD_SIZE: u32 = 4;
const TICKS:      u64 = 24;
const WORLD_SEED: u64 = 99;

// ── Configuration ─────────────────────────────────────────────────────────────

const SQUAD_JSON: &str = r#"{
  "agent": { "commitment_bonus": 0.08, "seed": 7 },
  "properties": [
    { "name": "Health",       "kind": "float", "min": 0, "max": 100, "start": { "min": 60, "max": 100 } },
    { "name": "Ammo",         "kind": "int",   "min": 0, "max": 6,   "start": { "min": 1,  "max": 6 } },
    { "name": "EnemyVisible", "kind": "bool" },
    { "name": "Cover",        "kind": "float", "value": 0.3 }
  ],
  "behaviors": [
    { "name": "Patrol", "considerations": [
        { "property": "EnemyVisible", "curve": { "keys": [ { "time": 0, "value": 0.4 }, { "time": 1, "value": 0.0 } ] } }
    ] },
    { "name": "Attack", "considerations": [
        { "property": "EnemyVisible", "curve": { "keys": [ { "time": 0, "value": 0 }, { "time": 1, "value": 1 } ] } },
        { "property": "Ammo",         "curve": { "keys": [ { "time": 0, "value": 0 }, { "time": 0.2, "value": 0.8 }, { "time": 1, "value": 1 } ] } },
        { "property": "Health",       "curve": { "keys": [ { "time": 0.2, "value": 0 }, { "time": 0.5, "value": 1 } ], "mode": "hermite" } }
    ] },
    { "name": "Reload", "considerations": [
        { "property": "Ammo",  "curve": { "keys": [ { "time": 0, "value": 1 }, { "time": 0.5, "value": 0.2 }, { "time": 1, "value": 0 } ] } },
        { "property": "Cover", "curve": { "keys": [ { "time": 0, "value": 0.3 }, { "time": 1, "value": 1 } ] } }
    ] },
    { "name": "Flee", "considerations": [
        { "property": "Health", "curve": { "keys": [ { "time": 0, "value": 1 }, { "time": 0.35, "value": 0.9 }, { "time": 0.5, "value": 0 } ] } }
    ] }
  ]
}"#;

#[derive(Deserialize)]
struct SquadConfig {
    #[serde(default)]
    agent:      AgentConfig,
    properties: Vec<PropertySpec>,
    behaviors:  Vec<BehaviorDef>,
}

#[derive(Deserialize)]
struct BehaviorDef {
    name:           String,
    considerations: Vec<ConsiderationDef>,
}

#[derive(Deserialize)]
struct ConsiderationDef {
    property: String,
    curve:    ResponseCurve,
}

// ── Orders ────────────────────────────────────────────────────────────────────

/// What a soldier's active behavior asked for this tick.  Actions only record
/// the order; the world applies it after the tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
enum Order {
    #[default]
    Idle,
    Patrol,
    Attack,
    Reload,
    Flee,
}

impl Order {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Patrol" => Some(Order::Patrol),
            "Attack" => Some(Order::Attack),
            "Reload" => Some(Order::Reload),
            "Flee"   => Some(Order::Flee),
            _        => None,
        }
    }
}

struct Soldier {
    agent: Agent,
    order: Rc<Cell<Order>>,
    kills: u32,
}

// ── Observer: count behavior switches ─────────────────────────────────────────

#[derive(Default)]
struct SwitchCounter {
    switches: usize,
}

impl AgentObserver for SwitchCounter {
    fn on_selection_changed(&mut self, _tick: Tick, _from: Option<BehaviorId>, _to: BehaviorId) {
        self.switches += 1;
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn build_soldier(id: AgentId, config: &SquadConfig) -> Result<Soldier> {
    let mut agent = AgentBuilder::new(format!("soldier-{}", id.0))
        .id(id)
        .config(config.agent.clone())
        .properties(config.properties.iter().cloned())
        .build()?;

    let order = Rc::new(Cell::new(Order::Idle));
    for def in &config.behaviors {
        let Some(kind) = Order::from_name(&def.name) else {
            bail!("behavior {:?} has no matching order", def.name);
        };
        let slot = Rc::clone(&order);
        let behavior = agent
            .behavior(def.name.clone())
            .considerations(
                def.considerations
                    .iter()
                    .map(|c| Consideration::new(c.property.clone(), c.curve.clone())),
            )
            .action(move || slot.set(kind))
            .build()?;
        agent.add_behavior(behavior)?;
    }

    Ok(Soldier { agent, order, kills: 0 })
}

// ── World ─────────────────────────────────────────────────────────────────────

fn prop(agent: &Agent, name: &str) -> Result<f32> {
    agent
        .properties()
        .by_name(name)
        .map(|p| p.raw_value())
        .with_context(|| format!("{} has no property {name:?}", agent.name()))
}

/// Apply one tick of world events and the soldier's last order.
fn step_world(soldier: &mut Soldier, world: &mut AgentRng) -> Result<()> {
    let agent = &mut soldier.agent;
    let health = prop(agent, "Health")?;
    let ammo   = prop(agent, "Ammo")?;
    let cover  = prop(agent, "Cover")?;

    let mut health_delta = 0.0;
    let mut ammo_delta   = 0.0;
    let mut cover_next   = cover;

    match soldier.order.replace(Order::Idle) {
        Order::Idle | Order::Patrol => cover_next = (cover - 0.1).max(0.1),
        Order::Attack => {
            ammo_delta -= 1.0;
            if ammo >= 1.0 && world.gen_bool(0.35) {
                soldier.kills += 1;
            }
        }
        Order::Reload => ammo_delta += 2.0,
        Order::Flee => {
            cover_next = 1.0;
            health_delta += 4.0;
        }
    }

    let enemy_visible = world.gen_bool(0.6);
    if enemy_visible {
        let exposure = 1.0 - cover_next;
        health_delta -= world.uniform_f32(0.0, 18.0) * exposure;
    }

    agent.set_value_by_name("Health", health + health_delta);
    agent.set_value_by_name("Ammo", ammo + ammo_delta);
    agent.set_value_by_name("Cover", cover_next);
    agent.set_value_by_name("EnemyVisible", if enemy_visible { 1.0 } else { 0.0 });
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config: SquadConfig =
        serde_json::from_str(SQUAD_JSON).context("parsing squad configuration")?;

    println!("=== squad — utility-AI fire team ===");
    println!(
        "Soldiers: {SQUAD_SIZE}  |  Ticks: {TICKS}  |  Commitment bonus: {}",
        config.agent.commitment_bonus
    );
    println!();

    let mut squad = (0..SQUAD_SIZE)
        .map(|i| build_soldier(AgentId(i), &config))
        .collect::<Result<Vec<_>>>()?;
    for s in &squad {
        let props: Vec<String> = s.agent.properties().iter().map(|(_, p)| p.to_string()).collect();
        println!("{}: {}", s.agent.name(), props.join(", "));
    }
    println!();

    let mut world = AgentRng::new(WORLD_SEED, AgentId(SQUAD_SIZE));
    let mut switches = SwitchCounter::default();

    for tick in 0..TICKS {
        let mut row = Vec::with_capacity(squad.len());
        for soldier in &mut squad {
            let active = soldier
                .agent
                .tick_with(&mut switches)
                .and_then(|id| soldier.agent.get_behavior(id))
                .map_or("-", |b| b.name());
            row.push(format!("{active:<6}"));
        }
        println!("{tick:>4}  {}", row.join(" "));
        for soldier in &mut squad {
            step_world(soldier, &mut world)?;
        }
    }

    println!();
    for s in &squad {
        info!(
            soldier = s.agent.name(),
            kills   = s.kills,
            health  = prop(&s.agent, "Health")?,
            "final state"
        );
    }
    println!("Behavior switches across the squad: {}", switches.switches);
    Ok(())
}
