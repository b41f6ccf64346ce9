use super::*;

/// Allocate through the trait object, the way containers see allocators.
fn allocate_via_dyn(allocator: &dyn Allocator, size: usize) -> usize {
    let mut block = allocator.allocate(size);
    let len = block.len();
    assert!(allocator.free(&mut block));
    len
}

#[test]
fn both_strategies_serve_exact_sizes() {
    let heap = HeapAllocator::new();
    let arena = ArenaAllocator::new(256);
    for size in [1, 7, 16, 33] {
        assert_eq!(allocate_via_dyn(&heap, size), size);
        assert_eq!(allocate_via_dyn(&arena, size), size);
    }
}

#[test]
fn zero_sized_requests_yield_empty_blocks() {
    let heap = HeapAllocator::new();
    let arena = ArenaAllocator::new(64);
    assert!(heap.allocate(0).is_empty());
    assert!(arena.allocate(0).is_empty());
    assert_eq!(arena.used(), 0);
}

#[test]
#[should_panic(expected = "fatal allocation failure")]
fn allocate_is_fatal_on_exhaustion() {
    let arena = ArenaAllocator::new(32);
    let _block = arena.allocate(33);
}

#[test]
fn try_allocate_reports_exhaustion() {
    let arena = ArenaAllocator::new(32);
    let err = arena.try_allocate(64).err();
    assert_eq!(
        err,
        Some(AllocError::Exhausted {
            requested: 64,
            remaining: 32
        })
    );
}

#[test]
fn reset_reclaims_arena_through_trait() {
    let mut arena = ArenaAllocator::new(64);
    {
        let allocator: &dyn Allocator = &arena;
        let _a = allocator.allocate(64);
    }
    let allocator: &mut dyn Allocator = &mut arena;
    allocator.reset();
    assert_eq!(arena.used(), 0);
}
