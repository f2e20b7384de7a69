//! Permutation generation.
//!
//! Two approaches are provided. The recursive one visits every ordering and
//! therefore repeats permutations when the input has duplicate elements. The
//! iterative one is Knuth's Algorithm L: it walks the permutations of a sorted
//! copy in lexicographic order and never repeats one, so `"aaa"` yields a
//! single permutation.
//!
//! Both grow as `n!`; keep inputs small.

/// Visits every permutation of `items`, duplicates included.
///
/// An empty input yields exactly one empty permutation.
pub fn recursive_permutations<T, F>(items: &[T], mut visit: F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    let mut prefix = Vec::with_capacity(items.len());
    recurse(items.to_vec(), &mut prefix, &mut visit);
}

fn recurse<T, F>(remaining: Vec<T>, prefix: &mut Vec<T>, visit: &mut F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    if remaining.is_empty() {
        visit(prefix.as_slice());
        return;
    }

    for i in 0..remaining.len() {
        let mut rest = remaining.clone();
        let item = rest.remove(i);
        prefix.push(item);
        recurse(rest, prefix, visit);
        prefix.pop();
    }
}

/// Visits every distinct permutation of `items` in lexicographic order.
pub fn unique_permutations<T, F>(items: &[T], mut visit: F)
where
    T: Ord + Clone,
    F: FnMut(&[T]),
{
    let mut iter = UniquePermutations::new(items);
    while let Some(permutation) = iter.next_slice() {
        visit(permutation);
    }
}

/// Lazy Algorithm L over a sorted copy of the input.
#[derive(Debug, Clone)]
pub struct UniquePermutations<T> {
    current: Vec<T>,
    started: bool,
    finished: bool,
}

impl<T: Ord + Clone> UniquePermutations<T> {
    pub fn new(items: &[T]) -> Self {
        let mut current = items.to_vec();
        current.sort();
        Self {
            current,
            started: false,
            finished: false,
        }
    }

    /// Borrowing variant of `next`, avoids one allocation per permutation.
    pub fn next_slice(&mut self) -> Option<&[T]> {
        if self.finished {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.current);
        }
        if advance(&mut self.current) {
            Some(&self.current)
        } else {
            self.finished = true;
            None
        }
    }
}

impl<T: Ord + Clone> Iterator for UniquePermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_slice().map(|p| p.to_vec())
    }
}

/// Steps `a` to its next lexicographic permutation in place.
/// Returns `false` when `a` is already reverse-sorted (the last permutation).
fn advance<T: Ord>(a: &mut [T]) -> bool {
    if a.len() < 2 {
        return false;
    }

    // 找出最大的 i 使得 a[i] < a[i + 1]
    let mut i = a.len() - 2;
    while a[i] >= a[i + 1] {
        if i == 0 {
            return false;
        }
        i -= 1;
    }

    // 找出最大的 j 使得 a[i] < a[j]
    let mut j = a.len() - 1;
    while a[i] >= a[j] {
        j -= 1;
    }

    a.swap(i, j);
    a[i + 1..].reverse();
    true
}

/// Collects the permutations of the characters of `s` as strings.
pub fn permutations_of(s: &str, unique: bool) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let collect = |p: &[char]| out.push(p.iter().collect::<String>());
    if unique {
        unique_permutations(&chars, collect);
    } else {
        recursive_permutations(&chars, collect);
    }
    out
}
