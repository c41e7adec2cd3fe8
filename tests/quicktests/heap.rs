use grove::compare::Reversed;
use grove::heap::Heap;
use grove::Error;

#[quickcheck]
fn peek_is_always_the_minimum(xs: Vec<i32>) -> bool {
    let mut heap = Heap::new();
    let mut inserted = Vec::new();

    xs.into_iter().all(|x| {
        heap.insert(x);
        inserted.push(x);
        heap.peek_top().ok() == inserted.iter().min()
    })
}

#[quickcheck]
fn extraction_sorts(xs: Vec<i32>) -> bool {
    let mut heap = Heap::new();
    for x in &xs {
        heap.insert(*x);
    }

    let mut drained = Vec::new();
    while let Ok(x) = heap.extract_top() {
        drained.push(x);
    }

    let mut expected = xs;
    expected.sort_unstable();
    drained == expected && heap.extract_top() == Err(Error::EmptyStructure)
}

#[quickcheck]
fn bulk_build_with_any_arity_sorts(xs: Vec<u16>, arity: u8) -> bool {
    let arity = 2 + usize::from(arity % 7);
    let heap = Heap::from_vec_with(xs.clone(), Reversed)
        .with_arity(arity)
        .expect("arity is at least 2");

    let mut expected = xs;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    heap.into_sorted_vec() == expected
}
