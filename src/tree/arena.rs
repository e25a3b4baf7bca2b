/// Index of a node inside an [`Arena`]. Handles stay valid until the node they
/// point to is taken out of the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Handle(usize);

impl Handle {
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Slot storage for tree nodes. Freed slots are recycled by later allocations
/// so a tree that churns doesn't keep growing.
#[derive(Clone, Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    free: Vec<Handle>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// The number of live elements.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// An exclusive upper bound on [`Handle::index`] for every live handle.
    pub(crate) fn bound(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        match self.free.pop() {
            Some(handle) => {
                self.slots[handle.0] = Some(element);
                handle
            }
            None => {
                self.slots.push(Some(element));
                Handle(self.slots.len() - 1)
            }
        }
    }

    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.0]
            .as_ref()
            .expect("`Arena::get` - `handle` is stale")
    }

    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.0]
            .as_mut()
            .expect("`Arena::get_mut` - `handle` is stale")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.0]
            .take()
            .expect("`Arena::take` - `handle` is stale");
        self.free.push(handle);
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}
