//! Tick-driven scheduler that owns the level and every bot on it.

use digbots_core::{EventQueue, LevelMap};
use log::debug;

use crate::bot::{Bot, BotAction};

/// Handle to a bot added to a [`Simulation`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BotId(pub usize);

/// Runs bots against a [`LevelMap`].
///
/// Each bot is scheduled on an [`EventQueue`] at the tick of its next
/// action. After an action, the world's pending events are forwarded to
/// every bot before anything else runs, so a tile broken by one bot is seen
/// by all of them on their next action.
#[derive(Debug)]
pub struct Simulation {
    world: LevelMap,
    bots: Vec<Bot>,
    queue: EventQueue<BotId>,
    now: u64,
}

impl Simulation {
    pub fn new(world: LevelMap) -> Self {
        Self {
            world,
            bots: Vec::new(),
            queue: EventQueue::new(),
            now: 0,
        }
    }

    /// Add a bot; it first acts at the current tick.
    pub fn add_bot(&mut self, bot: impl Into<Bot>) -> BotId {
        let id = BotId(self.bots.len());
        self.bots.push(bot.into());
        self.queue.push(id, self.now);
        id
    }

    pub fn world(&self) -> &LevelMap {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut LevelMap {
        &mut self.world
    }

    pub fn bot(&self, id: BotId) -> Option<&Bot> {
        self.bots.get(id.0)
    }

    /// Current tick.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Whether no bot has an action scheduled.
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Run the next scheduled action.
    pub fn step(&mut self) -> Option<(BotId, BotAction)> {
        let (id, tick) = self.queue.pop()?;
        self.now = tick;
        let bot = self.bots.get_mut(id.0)?;
        let action = bot.act(&mut self.world);
        let next = action.delay(bot.config());

        for event in self.world.drain_events() {
            for bot in &mut self.bots {
                bot.on_world_event(&event);
            }
        }

        match next {
            Some(delay) => self.queue.push(id, tick + delay),
            None => debug!("bot {} finished at tick {tick}", id.0),
        }
        Some((id, action))
    }

    /// Run every action scheduled at or before `tick`.
    pub fn run_until(&mut self, tick: u64) -> usize {
        let mut steps = 0;
        while self.queue.peek_tick().is_some_and(|t| t <= tick) {
            if self.step().is_none() {
                break;
            }
            steps += 1;
        }
        steps
    }

    /// Run at most `max_steps` actions, stopping early once idle.
    pub fn run(&mut self, max_steps: usize) -> usize {
        let mut steps = 0;
        while steps < max_steps && self.step().is_some() {
            steps += 1;
        }
        steps
    }
}
