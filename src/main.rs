fn main() {
    duel_shooter::game::run();
}
