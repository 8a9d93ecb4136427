fn main() -> anyhow::Result<()> {
    phrase_game_terminal::run()
}
