use std::fmt;

/// Byte-addressed data memory. Accesses outside the configured capacity
/// fault instead of wrapping; a generated sequence that faults is a
/// generator bug, not a recoverable condition.
#[derive(Debug, Clone)]
pub struct Sram {
    data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SramFault {
    pub address: u16,
    pub capacity: usize,
}

impl fmt::Display for SramFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "address {:#06x} outside SRAM capacity {:#06x}",
            self.address, self.capacity
        )
    }
}

impl std::error::Error for SramFault {}

impl Sram {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn load(&self, address: u16) -> Result<u8, SramFault> {
        self.data
            .get(address as usize)
            .copied()
            .ok_or(SramFault {
                address,
                capacity: self.data.len(),
            })
    }

    pub fn store(&mut self, address: u16, value: u8) -> Result<(), SramFault> {
        match self.data.get_mut(address as usize) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SramFault {
                address,
                capacity: self.data.len(),
            }),
        }
    }
}
