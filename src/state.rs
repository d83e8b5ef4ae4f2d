use crate::cfg;
use crate::Pack;
use std::fmt;

/// The stack's counter pair, unpacked from a single atomic word.
///
/// `committed` is the number of slots holding published values; `reserved`
/// tracks the boundary last claimed for exclusive slot access, one above
/// `committed` while a push is writing its slot and one below while a pop
/// is consuming the top slot. Keeping both counters in one word lets a
/// single compare-and-swap verify that no operation is in flight *and*
/// claim the next slot, so a stale observation of one counter can never
/// pair with a fresh value of the other.
#[derive(Copy, Clone, Eq, PartialEq)]
pub(crate) struct State {
    pub(crate) committed: usize,
    pub(crate) reserved: usize,
}

#[repr(transparent)]
struct Committed(usize);

#[repr(transparent)]
struct Reserved(usize);

impl Pack for Committed {
    const LEN: usize = cfg::WIDTH / 2;

    type Prev = ();

    fn as_usize(&self) -> usize {
        self.0
    }

    fn from_usize(val: usize) -> Self {
        debug_assert!(val <= Self::BITS);
        Committed(val)
    }
}

impl Pack for Reserved {
    const LEN: usize = cfg::WIDTH / 2;

    type Prev = Committed;

    fn as_usize(&self) -> usize {
        self.0
    }

    fn from_usize(val: usize) -> Self {
        debug_assert!(val <= Self::BITS);
        Reserved(val)
    }
}

impl State {
    /// The largest slot count representable in either half of the word.
    pub(crate) const MAX: usize = Committed::BITS;

    #[inline(always)]
    pub(crate) fn from_packed(word: usize) -> Self {
        Self {
            committed: Committed::from_packed(word).as_usize(),
            reserved: Reserved::from_packed(word).as_usize(),
        }
    }

    #[inline(always)]
    pub(crate) fn pack(self) -> usize {
        Reserved::from_usize(self.reserved).pack(Committed::from_usize(self.committed).pack(0))
    }

    /// Both counters agree; no push or pop is in flight.
    #[inline(always)]
    pub(crate) fn quiescent(self) -> bool {
        self.committed == self.reserved
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("committed", &self.committed)
            .field("reserved", &self.reserved)
            .finish()
    }
}
