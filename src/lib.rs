pub mod config;
pub mod engine;
pub mod errors;
pub mod gamelog;
pub mod persistence;
pub mod world;

use config::GameConfig;
use engine::{Output, Player, handle_examine, handle_inventory, render_room};
use errors::{GameError, WorldError};
use gamelog::GameLog;
use world::World;

pub use world::build_world;

pub const GAME_TITLE: &str = "Echoes of Adkins' House";

pub const MENU: [&str; 10] = [
    "- move north/south/east/west/up/down",
    "- look",
    "- pick up [item]",
    "- use [item]",
    "- examine [item]",
    "- inventory",
    "- help",
    "- save",
    "- load",
    "- quit",
];

/// The whole game: world, player, and where its files go.
pub struct GameState {
    pub world: World,
    pub player: Player,
    pub config: GameConfig,
    pub log: GameLog,
}

/// Text after `verb` when the command is exactly `verb` or `verb` followed by a space.
fn argument<'a>(command: &'a str, verb: &str) -> Option<&'a str> {
    let rest = command.strip_prefix(verb)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

impl GameState {
    /// Build the fixed world and reset the game log.
    pub fn new(config: GameConfig) -> Result<Self, WorldError> {
        let world = build_world()?;
        let player = Player::new(world.start_room.clone());
        let log = GameLog::start(config.log_path.clone());

        Ok(GameState {
            world,
            player,
            config,
            log,
        })
    }

    /// Title, the starting room, and the command menu.
    pub fn initialize(&self) -> Result<Output, GameError> {
        let mut out = Output::new();
        out.title(GAME_TITLE);
        render_room(&mut out, self.player.room(&self.world)?);
        self.show_menu(&mut out);
        Ok(out)
    }

    fn show_menu(&self, out: &mut Output) {
        out.title("Commands:");
        for line in MENU {
            out.say(line);
        }
    }

    /// Process a single player input; returns (output, quit?).
    ///
    /// The input is trimmed and lowercased before matching.
    pub fn step(&mut self, input: &str) -> Result<(Output, bool), GameError> {
        let mut out = Output::new();
        let command = input.trim().to_lowercase();

        if let Some(direction) = command.strip_prefix("move ") {
            let outcome = self
                .player
                .move_to(&mut out, &self.world, direction.trim())?;
            self.log.record(&outcome.log);
        } else if command == "look" {
            render_room(&mut out, self.player.room(&self.world)?);
            self.log.record("Player looked.");
        } else if let Some(item_name) = argument(&command, "pick up") {
            if item_name.is_empty() {
                out.say("You must specify an item to pick up.");
            } else {
                let outcome = self.player.pick_up(&mut out, &mut self.world, item_name)?;
                self.log.record(&outcome.log);
            }
        } else if let Some(item_name) = argument(&command, "use") {
            if item_name.is_empty() {
                out.say("You must specify an item to use.");
            } else {
                let outcome = self.player.use_item(&mut out, &self.world, item_name)?;
                self.log.record(&outcome.log);
            }
        } else if let Some(item_name) = argument(&command, "examine") {
            if item_name.is_empty() {
                out.say("Examine what?");
            } else {
                let room = self.player.room(&self.world)?;
                handle_examine(&mut out, &self.world, &self.player.inventory, room, item_name)?;
            }
        } else if command == "inventory" || command == "i" {
            handle_inventory(&mut out, &self.player.inventory);
        } else if command == "help" {
            self.show_menu(&mut out);
        } else if command == "save" {
            self.save(&mut out);
        } else if command == "load" {
            self.load(&mut out);
        } else if command == "quit" {
            out.say("Thanks for playing!");
            self.log.record("Player quit.");
            return Ok((out, true));
        } else {
            out.say("Unknown command.");
        }

        Ok((out, false))
    }

    pub fn save(&self, out: &mut Output) {
        match persistence::save_game(&self.config.save_path, &self.world, &self.player) {
            Ok(()) => {
                out.say("Game saved.");
                self.log.record("Game saved.");
            }
            Err(e) => {
                out.say(format!("Save error: {}", e));
                self.log.record(&format!("Save error: {}", e));
            }
        }
    }

    pub fn load(&mut self, out: &mut Output) {
        match persistence::load_game(&self.config.save_path, &mut self.world, &mut self.player) {
            Ok(_) => {
                out.say("Game loaded.");
                self.log.record("Game loaded.");
            }
            Err(e) if e.is_expected() => {
                out.say(format!("Load error: {}", e));
                self.log.record(&format!("Load error: {}", e));
            }
            Err(e) => {
                out.say(format!("Unexpected load error: {}", e));
                self.log.record(&format!("Unexpected load error: {}", e));
            }
        }
    }

    /// Input ended without a quit.
    pub fn interrupt(&self) -> Output {
        let mut out = Output::new();
        out.say("Game interrupted. Exiting...");
        self.log.record("Game interrupted.");
        out
    }

    /// A step failed; tell the player briefly and log the detail.
    pub fn report_fault(&self, err: &GameError) -> Output {
        let mut out = Output::new();
        out.say("An unexpected error occurred.");
        self.log.record(&format!("Runtime error: {}", err));
        out
    }
}
