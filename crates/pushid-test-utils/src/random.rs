use pushid_core::RandomSource;

/// Always returns the same symbol.
#[derive(Debug, Clone, Copy)]
pub struct ConstantRandom(pub u8);

impl RandomSource for ConstantRandom {
    fn next_symbol(&mut self) -> u8 {
        self.0
    }
}

/// Replays a script of symbols, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<u8>,
    pos: usize,
}

impl ScriptedRandom {
    /// Panics if `script` is empty.
    pub fn new(script: Vec<u8>) -> Self {
        assert!(!script.is_empty(), "ScriptedRandom needs at least one symbol");
        Self { script, pos: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_symbol(&mut self) -> u8 {
        let symbol = self.script[self.pos % self.script.len()];
        self.pos += 1;
        symbol
    }
}
