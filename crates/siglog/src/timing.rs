/// Instruction class on the multi-cycle core, keyed by how many clock
/// edges the test driver must advance before sampling results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpClass {
    DataProcessing,
    MemoryLoad,
    MemoryStore,
    Branch,
}

impl OpClass {
    /// Clock cycles the class takes to retire.
    pub fn cycles(self) -> u64 {
        match self {
            OpClass::DataProcessing | OpClass::Branch => 3,
            OpClass::MemoryLoad | OpClass::MemoryStore => 4,
        }
    }
}
