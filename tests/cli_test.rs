#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::{self, Cursor, Write};

    use log::LevelFilter;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use seabattle::ui::{banner, confirm, narrate, side_by_side};
    use seabattle::{
        parse_coord, parse_level, AiPlayer, Board, BoardFactory, CliPlayer, Coordinate, Match,
        Orientation, Player, ShotError, ShotOutcome, Vessel,
    };

    #[test]
    fn test_parse_coord() {
        assert_eq!(parse_coord("1 1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(parse_coord("  6   6 "), Ok(Coordinate::new(5, 5)));
        // shape only; the board rejects these later
        assert_eq!(parse_coord("0 9"), Ok(Coordinate::new(-1, 8)));

        let shape = Err("Enter two coordinates separated by a space!".to_string());
        assert_eq!(parse_coord(""), shape);
        assert_eq!(parse_coord("3"), shape);
        assert_eq!(parse_coord("1 2 3"), shape);

        let digits = Err("Enter numbers only!".to_string());
        assert_eq!(parse_coord("a b"), digits);
        assert_eq!(parse_coord("-1 2"), digits);
        assert_eq!(parse_coord("2 x"), digits);
    }

    #[test]
    fn test_cli_player_reprompts_until_valid() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut player = CliPlayer::new(Cursor::new("a b\n1\n3 4\n"), Vec::<u8>::new());
        assert_eq!(
            player.select_target(&mut rng).unwrap(),
            Coordinate::new(2, 3)
        );

        let out = String::from_utf8(player.into_output()).unwrap();
        assert_eq!(out.matches("Where do we fire? (row col): ").count(), 3);
        assert!(out.contains("Enter numbers only!"));
        assert!(out.contains("Enter two coordinates separated by a space!"));
    }

    #[test]
    fn test_cli_player_closed_input() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut player = CliPlayer::new(Cursor::new("oops\n"), Vec::<u8>::new());
        let err = player.select_target(&mut rng).unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn test_cli_player_reports_rejections() {
        let mut player = CliPlayer::new(Cursor::new(""), Vec::<u8>::new());
        player.handle_rejected_shot(Coordinate::new(9, 9), ShotError::OutOfBounds);
        player.handle_rejected_shot(Coordinate::new(0, 0), ShotError::AlreadyTargeted);
        let out = String::from_utf8(player.into_output()).unwrap();
        assert_eq!(
            out,
            "Shot is off the board! Try again.\nThat cell was already targeted! Try again.\n"
        );
    }

    /// Sink that refuses every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_rejection_report_survives_broken_output() {
        let mut player = CliPlayer::new(Cursor::new("2 2\n"), BrokenPipe);
        player.handle_rejected_shot(Coordinate::new(9, 9), ShotError::OutOfBounds);

        // the prompt itself still fails loudly
        let mut rng = SmallRng::seed_from_u64(0);
        assert!(player.select_target(&mut rng).is_err());
    }

    #[test]
    fn test_confirm() {
        let mut out = Vec::<u8>::new();
        assert!(confirm(&mut Cursor::new("maybe\ny\n"), &mut out).unwrap());
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Ready for battle?"));
        assert_eq!(text.matches("Shall we play? Enter Y or N: ").count(), 1);

        assert!(!confirm(&mut Cursor::new("N\n"), &mut Vec::<u8>::new()).unwrap());
        assert!(!confirm(&mut Cursor::new(""), &mut Vec::<u8>::new()).unwrap());
    }

    #[test]
    fn test_presentation_helpers() {
        assert_eq!(narrate(ShotOutcome::Miss), "Miss!");
        assert_eq!(narrate(ShotOutcome::Hit), "Ship hit!");
        assert_eq!(narrate(ShotOutcome::Destroyed), "Ship destroyed!");

        let b = banner("You won!");
        let lines: Vec<_> = b.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "=".repeat(44));
        assert_eq!(lines[1].trim(), "You won!");

        let board = Board::new();
        let both = side_by_side("Yours:", board.view(true), "Theirs:", board.view(false));
        assert_eq!(both.lines().count(), 10);
        assert!(both.lines().nth(1).unwrap().contains("Yours:"));
        assert!(both.lines().nth(1).unwrap().contains("Theirs:"));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
    }

    #[test]
    fn test_typed_match_against_the_computer() {
        let mut rng = SmallRng::seed_from_u64(12345);
        let own = BoardFactory::default().generate(&mut rng).unwrap();
        let mut enemy = Board::new();
        enemy
            .place_vessel(Vessel::new(Coordinate::new(1, 1), 2, Orientation::Vertical).unwrap())
            .unwrap();
        enemy.begin_play();

        let human = CliPlayer::new(Cursor::new("2 2\n3 2\n"), Vec::<u8>::new());
        let players: [Box<dyn Player>; 2] = [Box::new(human), Box::new(AiPlayer::new())];
        let mut game = Match::new(players, [own, enemy], rng);

        assert_eq!(game.run().unwrap(), 0);
        assert_eq!(game.shots_fired(0), 2);
        assert_eq!(game.shots_fired(1), 0);
    }
}
