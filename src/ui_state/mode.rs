#[derive(Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Mode {
    #[default]
    Player,
    QUIT,
}
