use std::{
    collections::HashSet,
    fmt,
    io::{self, BufRead, Write},
};

use clap::{App, Arg, ArgMatches};
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use broadside::{AttackOutcome, Direction, Kind, Player, Ship, BOARD_SIZE};

fn main() -> io::Result<()> {
    let matches = App::new("Battleship")
        .version("0.1.0")
        .about("Command line target practice against your own fleet.")
        .arg(
            Arg::with_name("name")
                .short("n")
                .long("name")
                .value_name("NAME")
                .help("pre-specify the player name")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("FLEET")
                .help("pre-specify how the fleet gets placed")
                .takes_value(true)
                .possible_values(&["manual", "random", "rand"])
                .case_insensitive(true),
        )
        .get_matches();

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    let mut rng = rand::thread_rng();

    let name = choose_name(&matches, &mut input)?;
    let mut player = Player::new(name);
    let mut fleet = Fleet::new();

    if choose_random_fleet(&matches, &mut input)? {
        fleet.randomize(&mut rng, &mut player);
    } else {
        choose_placements(&mut rng, &mut player, &mut fleet, &mut input)?;
    }

    bombard(&mut player, &fleet, &mut input)
}

/// Choose the player name based on either args or cli input.
fn choose_name<B: BufRead>(matches: &ArgMatches, input: &mut InputReader<B>) -> io::Result<String> {
    Ok(match matches.value_of("name") {
        Some(name) => name.to_string(),
        None => input.read_input("What is your name?", |input| {
            if input.is_empty() {
                println!("A name cannot be empty.");
                None
            } else {
                Some(input.to_string())
            }
        })?,
    })
}

/// Choose whether the fleet is placed randomly, based on either args or cli
/// input.
fn choose_random_fleet<B: BufRead>(
    matches: &ArgMatches,
    input: &mut InputReader<B>,
) -> io::Result<bool> {
    Ok(if let Some(choice) = matches.value_of("fleet") {
        match choice.to_ascii_lowercase().as_str() {
            "manual" => false,
            "random" | "rand" => true,
            _ => unreachable!(),
        }
    } else {
        input.read_input_lower("Place your own fleet? (Y/n)", |input| match input {
            "yes" | "y" | "manual" | "" => Some(false),
            "no" | "n" | "random" | "rand" => Some(true),
            _ => {
                println!("Invalid selection.");
                None
            }
        })?
    })
}

/// Demo-side record of which ship class each board placement is, in
/// placement order, plus the classes still waiting to be placed.
struct Fleet {
    placed: Vec<Kind>,
    pending: Vec<Kind>,
}

impl Fleet {
    fn new() -> Self {
        Self {
            placed: Vec::new(),
            pending: Kind::ALL.to_vec(),
        }
    }

    fn mark_placed(&mut self, kind: Kind) {
        self.pending.retain(|&pending| pending != kind);
        self.placed.push(kind);
    }

    /// Randomly place every ship that hasn't been placed yet.
    fn randomize(&mut self, rng: &mut impl Rng, player: &mut Player) {
        for kind in std::mem::take(&mut self.pending) {
            match player.board_mut().add_ship_random(rng, Ship::by_kind(kind)) {
                Ok(()) => self.placed.push(kind),
                Err(_) => {
                    println!("No space left for the {}.", ShipFullName(kind));
                    self.pending.push(kind);
                }
            }
        }
    }
}

/// Choose placements for all ships using input from the player.
fn choose_placements(
    rng: &mut impl Rng,
    player: &mut Player,
    fleet: &mut Fleet,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Command {
        Done,
        Place(Kind, i32, i32, Direction),
        RandomizeRest,
        Help,
    }
    println!();
    println!("Place your ships. Type help or ? for commands.");
    loop {
        println!();
        if fleet.pending.is_empty() {
            println!("All ships placed, type done to start shooting.");
        } else {
            let mut kinds = fleet.pending.iter();
            print!(
                "Remaining ships to place: {}",
                ShipFullName(*kinds.next().unwrap())
            );
            for &kind in kinds {
                print!(", {}", ShipFullName(kind));
            }
            println!();
        }
        println!("Your current board:");
        show_setup_board(player, fleet);
        println!();

        /// Matcher for the placement command and its args.
        static PLACE: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)(?:place|put)\s+
        (?P<ship>\w+)\s+
        (?:(?:at|on|to|->|=>)\s+)?
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)\s+
        (?P<dir>\w+)$",
            )
            .unwrap()
        });

        let cmd = input.read_input_lower("> ", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "randomize" | "rand" | "random" => Some(Command::RandomizeRest),
            "done" | "start" => Some(Command::Done),
            other => {
                if let Some(captures) = PLACE.captures(other) {
                    let kind = match parse_kind(captures.name("ship").unwrap().as_str()) {
                        Some(kind) => kind,
                        None => {
                            println!(
                                "invalid ship: {}, choose \"carrier\", \"battleship\", \
                                 \"destroyer\", \"submarine\", or \"patrolboat\"",
                                captures.name("ship").unwrap().as_str()
                            );
                            return None;
                        }
                    };
                    let x = match parse_coord(captures.name("x").unwrap().as_str()) {
                        Some(x) => x,
                        None => {
                            println!(
                                "invalid x: {}, must be a number in range [0,9]",
                                captures.name("x").unwrap().as_str()
                            );
                            return None;
                        }
                    };
                    let y = match parse_coord(captures.name("y").unwrap().as_str()) {
                        Some(y) => y,
                        None => {
                            println!(
                                "invalid y: {}, must be a number in range [0,9]",
                                captures.name("y").unwrap().as_str()
                            );
                            return None;
                        }
                    };
                    let dir = match parse_direction(captures.name("dir").unwrap().as_str()) {
                        Some(dir) => dir,
                        None => {
                            println!(
                                "invalid direction {}, choose \"north\", \"east\", \"south\", \
                                 or \"west\"",
                                captures.name("dir").unwrap().as_str()
                            );
                            return None;
                        }
                    };
                    Some(Command::Place(kind, x, y, dir))
                } else {
                    println!("Invalid placement command \"{}\". Use '?' for help", other);
                    None
                }
            }
        })?;

        match cmd {
            Command::Done if fleet.pending.is_empty() => break,
            Command::Done => println!("You must place all your ships first!"),
            Command::Place(kind, x, y, dir) => {
                if !fleet.pending.contains(&kind) {
                    println!("The {} is already placed.", ShipFullName(kind));
                } else {
                    match player.board_mut().add_ship(x, y, dir, Ship::by_kind(kind)) {
                        Ok(()) => fleet.mark_placed(kind),
                        Err(err) => println!("Invalid placement: {}.", err.reason()),
                    }
                }
            }
            Command::RandomizeRest => fleet.randomize(rng, player),
            Command::Help => {
                println!(
                    "Available Commands:
    done                        if all ships are placed, start shooting.
    place <ship> <x>,<y> <dir>  place the ship with its origin at the given cell,
        facing <dir>. The hull trails away from the origin. Directions are
        \"north\", \"east\", \"south\", and \"west\". See below for ships.
    randomize                   randomly place the remaining ships.

Available Ships:
    \"carrier\" (\"cv\")
    \"battleship\" (\"bb\")
    \"destroyer\" (\"dd\")
    \"submarine\" (\"ss\")
    \"patrolboat\" (\"pb\")",
                );
            }
        }
    }
    Ok(())
}

/// Call shots against the player's own fleet until every ship is sunk.
fn bombard(
    player: &mut Player,
    fleet: &Fleet,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Command {
        Attack(i32, i32),
        Board,
        Help,
        Quit,
    }
    let mut misses: HashSet<(i32, i32)> = HashSet::new();
    let mut shots = 0u32;

    println!();
    println!("Target practice: call shots until the whole fleet is sunk.");
    println!();
    show_revealed_board(player, fleet, &misses);

    loop {
        /// Matcher for the attack command and its args.
        static ATTACK: Lazy<Regex> = Lazy::new(|| {
            Regex::new(
                r"^(?x)(?:(?:attack|fire|shoot)\s+)?
        (?P<x>[0-9]+)(?:\s*,\s*|\s+)(?P<y>[0-9]+)$",
            )
            .unwrap()
        });

        println!();
        let cmd = input.read_input_lower("> ", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "board" | "show" => Some(Command::Board),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => {
                if let Some(captures) = ATTACK.captures(other) {
                    let x = match parse_coord(captures.name("x").unwrap().as_str()) {
                        Some(x) => x,
                        None => {
                            println!(
                                "invalid x: {}, must be a number in range [0,9]",
                                captures.name("x").unwrap().as_str()
                            );
                            return None;
                        }
                    };
                    let y = match parse_coord(captures.name("y").unwrap().as_str()) {
                        Some(y) => y,
                        None => {
                            println!(
                                "invalid y: {}, must be a number in range [0,9]",
                                captures.name("y").unwrap().as_str()
                            );
                            return None;
                        }
                    };
                    Some(Command::Attack(x, y))
                } else {
                    println!("Invalid command \"{}\". Use '?' for help", other);
                    None
                }
            }
        })?;

        match cmd {
            Command::Attack(x, y) => {
                let target = player
                    .board()
                    .ships()
                    .position(|placement| placement.segment_at(x, y).is_some());
                shots += 1;
                match player.board_mut().attack(x, y) {
                    AttackOutcome::Miss => {
                        misses.insert((x, y));
                        println!("Miss.");
                    }
                    AttackOutcome::AlreadyDestroyed => {
                        println!("Already destroyed that section.");
                    }
                    AttackOutcome::DestroyedSegment => {
                        // Attacks only land when a ship occupies the cell.
                        let idx = target.unwrap();
                        let sunk = player.board().ships().nth(idx).unwrap().ship().is_sunk();
                        if sunk {
                            println!("Hit! You sank the {}!", ShipFullName(fleet.placed[idx]));
                        } else {
                            println!("Hit!");
                        }
                    }
                }
                println!();
                show_revealed_board(player, fleet, &misses);
                if player.board().all_sunk() {
                    println!();
                    println!(
                        "All of {}'s ships are sunk! {} shots fired.",
                        player.name(),
                        shots
                    );
                    break;
                }
            }
            Command::Board => show_revealed_board(player, fleet, &misses),
            Command::Help => {
                println!(
                    "Available Commands:
    attack <x>,<y>   fire at the given cell (\"attack\" may be omitted).
    board            reprint the board.
    quit             give up and exit.",
                );
            }
            Command::Quit => break,
        }
    }
    Ok(())
}

/// Parse a coordinate in `[0, BOARD_SIZE)`.
fn parse_coord(text: &str) -> Option<i32> {
    match text.parse::<i32>() {
        Ok(coord) if coord < BOARD_SIZE => Some(coord),
        _ => None,
    }
}

fn parse_kind(name: &str) -> Option<Kind> {
    match name {
        "cv" | "carrier" => Some(Kind::Carrier),
        "bb" | "battleship" => Some(Kind::Battleship),
        "dd" | "destroyer" => Some(Kind::Destroyer),
        "ss" | "sub" | "submarine" => Some(Kind::Submarine),
        "pb" | "patrol" | "patrolboat" => Some(Kind::PatrolBoat),
        _ => None,
    }
}

fn parse_direction(name: &str) -> Option<Direction> {
    match name {
        "north" | "n" => Some(Direction::North),
        "east" | "e" => Some(Direction::East),
        "south" | "s" => Some(Direction::South),
        "west" | "w" => Some(Direction::West),
        _ => None,
    }
}

/// Print out the setup view: water and the ships placed so far.
fn show_setup_board(player: &Player, fleet: &Fleet) {
    enum SetupCell {
        Empty,
        Ship(ShipAbbreviation),
    }
    impl fmt::Display for SetupCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                SetupCell::Empty => f.pad("~~"),
                SetupCell::Ship(abbrev) => fmt::Display::fmt(abbrev, f),
            }
        }
    }
    show_board(|x, y| {
        let target = player
            .board()
            .ships()
            .position(|placement| placement.segment_at(x, y).is_some());
        match target {
            Some(idx) => SetupCell::Ship(ShipAbbreviation(fleet.placed[idx])),
            None => SetupCell::Empty,
        }
    })
}

/// Print out the fully-revealed view: ships with hit and sunk marks, plus
/// shots that fell in the water.
fn show_revealed_board(player: &Player, fleet: &Fleet, misses: &HashSet<(i32, i32)>) {
    enum RevealedCell {
        Empty,
        Shot,
        Intact(ShipAbbreviation),
        Hit(ShipAbbreviation),
        Sunk(ShipAbbreviation),
    }
    impl fmt::Display for RevealedCell {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                RevealedCell::Empty => f.pad("~~"),
                RevealedCell::Shot => f.pad("x"),
                RevealedCell::Intact(abbrev) => fmt::Display::fmt(abbrev, f),
                RevealedCell::Hit(abbrev) => f.pad(&format!("x{}", abbrev.abbrev())),
                RevealedCell::Sunk(abbrev) => f.pad(&format!("X{}", abbrev.abbrev())),
            }
        }
    }
    show_board(|x, y| {
        let target = player.board().ships().enumerate().find_map(|(idx, placement)| {
            placement
                .segment_at(x, y)
                .map(|segment| (idx, placement, segment))
        });
        match target {
            None if misses.contains(&(x, y)) => RevealedCell::Shot,
            None => RevealedCell::Empty,
            Some((idx, placement, segment)) => {
                let abbrev = ShipAbbreviation(fleet.placed[idx]);
                if placement.ship().is_sunk() {
                    RevealedCell::Sunk(abbrev)
                } else if placement.ship().is_destroyed(segment) {
                    RevealedCell::Hit(abbrev)
                } else {
                    RevealedCell::Intact(abbrev)
                }
            }
        }
    })
}

/// Show the board by printing the grid, producing each cell from its
/// coordinates.
fn show_board<C: fmt::Display>(mut cell: impl FnMut(i32, i32) -> C) {
    print!("   ");
    for x in 0..BOARD_SIZE {
        print!("{:^4}", x);
    }
    println!();
    for y in 0..BOARD_SIZE {
        print!("{:>2} ", y);
        for x in 0..BOARD_SIZE {
            print!("{:^4}", cell(x, y));
        }
        println!();
    }
}

/// Display helper that prints the ship class's full name.
struct ShipFullName(Kind);

impl fmt::Display for ShipFullName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self.0 {
            Kind::Carrier => "carrier",
            Kind::Battleship => "battleship",
            Kind::Destroyer => "destroyer",
            Kind::Submarine => "submarine",
            Kind::PatrolBoat => "patrol boat",
        })
    }
}

/// Display helper that prints the ship class's two-letter abbreviation.
struct ShipAbbreviation(Kind);

impl ShipAbbreviation {
    fn abbrev(&self) -> &'static str {
        match self.0 {
            Kind::Carrier => "cv",
            Kind::Battleship => "bb",
            Kind::Destroyer => "dd",
            Kind::Submarine => "ss",
            Kind::PatrolBoat => "pb",
        }
    }
}

impl fmt::Display for ShipAbbreviation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.abbrev())
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns
    /// `Some`. Converts to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Repeatedly tries to read input until the input checker returns
    /// `Some`.
    fn read_input<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            std::process::exit(0);
        }
        Ok(())
    }
}
