use std::collections::{BTreeMap, BTreeSet};

use crate::{log, PlayerName};
use super::action::PlayerAction;
use super::collision::collides;
use super::dead_link::DeadLink;
use super::effect::{self, Effect, EffectKind};
use super::item::Item;
use super::rng::WorldRng;
use super::settings::WorldSettings;
use super::snake::Snake;
use super::streams::{ColorStream, ItemStream, SpawnStream};

/// The whole game world. Owns every snake, the item/spawn/color streams,
/// active effects and fading dead links; nothing holds a reference back.
///
/// `BTreeMap` keys give the deterministic "first player in name order"
/// ordering the item tie-break and respawn bookkeeping rely on.
pub struct Universe {
    pub settings: WorldSettings,
    pub snakes: BTreeMap<PlayerName, Snake>,
    /// Invariant: every key maps to a currently live snake.
    pub effects: BTreeMap<PlayerName, Vec<Effect>>,
    pub dead_links: Vec<DeadLink>,
    pub item_stream: ItemStream,
    pub spawn_stream: SpawnStream,
    pub color_stream: ColorStream,
    rng: WorldRng,
}

impl Universe {
    /// Rejects a malformed config before any world state exists.
    pub fn new(settings: WorldSettings, mut rng: WorldRng) -> Result<Self, String> {
        use crate::config::Validate;
        settings.validate()?;

        let item_stream = ItemStream::new(&settings, &mut rng)?;
        let spawn_stream = SpawnStream::new(&settings, &mut rng);
        let color_stream = ColorStream::new(settings.colors.clone());

        Ok(Self {
            settings,
            snakes: BTreeMap::new(),
            effects: BTreeMap::new(),
            dead_links: Vec::new(),
            item_stream,
            spawn_stream,
            color_stream,
            rng,
        })
    }

    /// Spawns a snake for `name` at the head of the spawn stream with the
    /// head of the color stream, then advances both, so no two joins ever
    /// share a spawn point or color entry.
    pub fn add_player(&mut self, name: &str) {
        let (at, heading) = self.spawn_stream.peek();
        let color = self.color_stream.peek();
        self.spawn_stream.advance(&mut self.rng);
        self.color_stream.advance();

        // A returning name must not inherit effects from its previous life.
        self.effects.remove(name);
        self.snakes
            .insert(name.to_string(), Snake::spawn(at, heading, color, &self.settings));
        log!("{} joined at ({:.1}, {:.1})", name, at.x, at.y);
    }

    /// Actions for unknown names are stale input from the collaborator side
    /// and are dropped.
    pub fn handle_player_action(&mut self, name: &str, action: PlayerAction) {
        match action {
            PlayerAction::Redirect(target) => {
                if let Some(snake) = self.snakes.get_mut(name) {
                    snake.redirect(target);
                }
            }
        }
    }

    /// The single live pickup, for collision and rendering.
    pub fn active_item(&self) -> &Item {
        self.item_stream.peek()
    }

    /// One frame of the world, in fixed order: advance everything, resolve
    /// the item pickup, resolve fatal collisions, respawn the dead.
    pub fn update(&mut self, dt: f32) {
        self.advance_phase(dt);
        self.item_phase();
        let dead = self.collision_phase();
        self.respawn_phase(&dead);
    }

    fn advance_phase(&mut self, dt: f32) {
        for (name, snake) in &mut self.snakes {
            let factor = self
                .effects
                .get(name)
                .map(|list| effect::speed_factor(list, &self.settings))
                .unwrap_or(1.0);
            snake.advance(dt, factor);
        }

        for list in self.effects.values_mut() {
            list.retain_mut(|e| e.update(dt));
        }
        self.effects.retain(|_, list| !list.is_empty());

        self.dead_links.retain_mut(|link| link.update(dt));

        if !self.item_stream.peek_mut().update(dt) {
            self.item_stream.advance(&mut self.rng);
        }
    }

    fn item_phase(&mut self) {
        let item = *self.item_stream.peek();
        let item_radius = item.kind.item_radius(&self.settings);

        // First collider in name order wins; the item is consumed no matter
        // how many heads touched it this frame.
        let winner = self
            .snakes
            .iter()
            .find(|(_, snake)| collides(snake.head(), snake.link_radius, item.at, item_radius))
            .map(|(name, _)| name.clone());
        let Some(winner) = winner else {
            return;
        };

        match item.kind {
            EffectKind::Food => {
                let snake = self
                    .snakes
                    .get_mut(&winner)
                    .expect("item winner should exist in snakes map");
                snake.feed(&self.settings);
                log!("{} ate food", winner);
            }
            EffectKind::ReverseControls => {
                // Global: everyone's controls flip, not just the winner's.
                for snake in self.snakes.values_mut() {
                    snake.reverse();
                }
                log!("{} reversed everyone's controls", winner);
            }
            kind => {
                let effect = Effect::new(kind, &self.settings);
                self.effects.entry(winner.clone()).or_default().insert(0, effect);
                log!("{} picked up {:?}", winner, kind);
            }
        }

        self.item_stream.advance(&mut self.rng);
    }

    /// Pure pass over the post-move snapshot; returns the names whose head
    /// hit something fatal, in name order.
    fn collision_phase(&self) -> BTreeSet<PlayerName> {
        let mut dead = BTreeSet::new();

        for (name, snake) in &self.snakes {
            if self.is_phantom(name) {
                continue;
            }
            let head = snake.head();

            // Link 1 trails immediately behind the head and overlaps it
            // every frame; only links from index 2 on count.
            let self_hit = snake
                .links
                .iter()
                .skip(2)
                .any(|&link| collides(head, snake.link_radius, link, snake.link_radius));
            if self_hit {
                log!("{} ran into itself", name);
                dead.insert(name.clone());
                continue;
            }

            for (other_name, other) in &self.snakes {
                if other_name == name || self.is_phantom(other_name) {
                    continue;
                }
                let hit = other
                    .links
                    .iter()
                    .any(|&link| collides(head, snake.link_radius, link, other.link_radius));
                if hit {
                    log!("{} crashed into {}", name, other_name);
                    dead.insert(name.clone());
                    break;
                }
            }
        }

        dead
    }

    /// Turns each dead body into fading links and brings the player back at
    /// the next spawn-stream entry with their old color and the respawn
    /// effect bundle. Replacement entries win over the old ones; dead links
    /// accumulate.
    fn respawn_phase(&mut self, dead: &BTreeSet<PlayerName>) {
        for name in dead {
            let snake = self
                .snakes
                .remove(name)
                .expect("dead players should be drawn from live snakes");
            let color = snake.color;
            self.dead_links.extend(snake.into_dead_links(&self.settings));

            let (at, heading) = self.spawn_stream.peek();
            self.spawn_stream.advance(&mut self.rng);

            self.snakes
                .insert(name.clone(), Snake::spawn(at, heading, color, &self.settings));
            self.effects
                .insert(name.clone(), effect::respawn_bundle(&self.settings));
            log!("{} respawned at ({:.1}, {:.1})", name, at.x, at.y);
        }
    }

    fn is_phantom(&self, name: &str) -> bool {
        self.effects
            .get(name)
            .is_some_and(|list| effect::is_phantom(list))
    }
}
