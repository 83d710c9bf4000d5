#[cfg(feature = "std")]
#[test]
fn test_level_from_env_and_repeat_init() {
    std::env::set_var(tictactoe::LOG_ENV, "DEBUG");
    tictactoe::init_logging();
    assert_eq!(log::max_level(), log::LevelFilter::Debug);
    // second install keeps the first logger
    tictactoe::init_logging();
    assert_eq!(log::max_level(), log::LevelFilter::Debug);
}
