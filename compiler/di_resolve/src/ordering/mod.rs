//! Registration ordering.
//!
//! Transient and scoped registrations are factories: nothing runs until the
//! service is resolved. A singleton is constructed on the spot, so every
//! registration its constructor reaches must already be in place. That
//! includes providers reached through lazy factories it triggers, stopping at
//! other singletons, which are already-built instances.
//!
//! The orderer turns that requirement into a constraint graph and emits a
//! stable topological order: among ready registrations the earliest declared
//! goes first, so a batch that is already valid keeps its order exactly.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use rustc_hash::{FxHashMap, FxHashSet};

use di_diagnostic::{cyclic_singleton_dependency, DiagnosticCollector};
use di_ir::{Location, ServiceDescriptor, TypeName};

/// How registrations are ordered in the generated routine.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum OrderingPolicy {
    /// Providers before the singletons that need them at construction time.
    #[default]
    DependencyOrder,
    /// Keep the deduplicated first-seen order.
    FirstSeen,
}

/// Order `descriptors` for emission.
///
/// Every input descriptor appears exactly once in the result. Singletons
/// caught in a construction cycle are reported through `diagnostics` (one
/// diagnostic per cycle, located with `locate`) and emitted after everything
/// that could be ordered, in first-seen order, together with registrations
/// that depend on them.
pub fn order_registrations<F>(
    descriptors: Vec<ServiceDescriptor>,
    policy: OrderingPolicy,
    locate: F,
    diagnostics: &mut DiagnosticCollector,
) -> Vec<ServiceDescriptor>
where
    F: Fn(&TypeName) -> Option<Location>,
{
    if policy == OrderingPolicy::FirstSeen || descriptors.is_empty() {
        return descriptors;
    }

    let graph = DependencyGraph::new(&descriptors);
    let (ordered, blocked) = graph.topological_order();

    if !blocked.is_empty() {
        for chain in graph.singleton_cycles(&blocked) {
            let names: Vec<TypeName> = chain
                .iter()
                .map(|&index| descriptors[index].implementation().clone())
                .collect();
            let location = locate(&names[0]);
            diagnostics.push(cyclic_singleton_dependency(&names, location.as_ref()));
        }
    }

    let moved = ordered
        .iter()
        .enumerate()
        .filter(|(position, index)| position != *index)
        .count();
    tracing::debug!(
        registrations = descriptors.len(),
        moved,
        blocked = blocked.len(),
        "ordered registrations"
    );

    let mut slots: Vec<Option<ServiceDescriptor>> = descriptors.into_iter().map(Some).collect();
    ordered
        .into_iter()
        .chain(blocked)
        .filter_map(|index| slots[index].take())
        .collect()
}

/// Dependency structure of one descriptor list, by index.
struct DependencyGraph<'a> {
    descriptors: &'a [ServiceDescriptor],
    /// `needs[i]`: registrations providing one of `i`'s parameter types.
    needs: Vec<Vec<usize>>,
    /// `before[i]`: registrations that must be emitted before `i`.
    before: Vec<FxHashSet<usize>>,
}

impl<'a> DependencyGraph<'a> {
    fn new(descriptors: &'a [ServiceDescriptor]) -> Self {
        let mut providers: FxHashMap<&TypeName, Vec<usize>> = FxHashMap::default();
        for (index, descriptor) in descriptors.iter().enumerate() {
            providers
                .entry(descriptor.interface())
                .or_default()
                .push(index);
        }

        let needs: Vec<Vec<usize>> = descriptors
            .iter()
            .map(|descriptor| {
                let mut direct = Vec::new();
                for param in descriptor.parameter_types() {
                    if let Some(found) = providers.get(param) {
                        for &provider in found {
                            if !direct.contains(&provider) {
                                direct.push(provider);
                            }
                        }
                    }
                }
                direct
            })
            .collect();

        let mut graph = DependencyGraph {
            descriptors,
            needs,
            before: vec![FxHashSet::default(); descriptors.len()],
        };
        for (index, descriptor) in descriptors.iter().enumerate() {
            if descriptor.lifetime().is_eager() {
                let reach = graph.construction_reach(index);
                graph.before[index] = reach;
            }
        }
        graph
    }

    /// Registrations touched while constructing eager registration `root`.
    ///
    /// Walks through lazy providers, stops at eager ones.
    fn construction_reach(&self, root: usize) -> FxHashSet<usize> {
        let mut reached = FxHashSet::default();
        let mut pending: Vec<usize> = self.needs[root].clone();
        while let Some(index) = pending.pop() {
            if !reached.insert(index) {
                continue;
            }
            if !self.descriptors[index].lifetime().is_eager() {
                pending.extend(self.needs[index].iter().copied());
            }
        }
        reached
    }

    /// Kahn's algorithm, always taking the smallest ready index.
    ///
    /// Returns the emitted order and the indices that never became ready.
    fn topological_order(&self) -> (Vec<usize>, Vec<usize>) {
        let count = self.descriptors.len();
        let mut waiting_on = vec![0usize; count];
        let mut unblocks: Vec<Vec<usize>> = vec![Vec::new(); count];
        for (index, before) in self.before.iter().enumerate() {
            waiting_on[index] = before.len();
            for &prerequisite in before {
                unblocks[prerequisite].push(index);
            }
        }

        let mut ready: BinaryHeap<Reverse<usize>> = waiting_on
            .iter()
            .enumerate()
            .filter(|(_, waiting)| **waiting == 0)
            .map(|(index, _)| Reverse(index))
            .collect();

        let mut ordered = Vec::with_capacity(count);
        while let Some(Reverse(index)) = ready.pop() {
            ordered.push(index);
            for &next in &unblocks[index] {
                waiting_on[next] -= 1;
                if waiting_on[next] == 0 {
                    ready.push(Reverse(next));
                }
            }
        }

        let blocked = (0..count).filter(|&index| waiting_on[index] > 0).collect();
        (ordered, blocked)
    }

    /// One dependency chain per construction cycle among `blocked`.
    ///
    /// Each chain starts and ends at the same eager registration. A singleton
    /// already shown on a reported chain does not start another one.
    fn singleton_cycles(&self, blocked: &[usize]) -> Vec<Vec<usize>> {
        let mut reported: FxHashSet<usize> = FxHashSet::default();
        let mut cycles = Vec::new();

        for &start in blocked {
            if reported.contains(&start) || !self.descriptors[start].lifetime().is_eager() {
                continue;
            }
            if let Some(chain) = self.shortest_cycle(start) {
                reported.extend(
                    chain
                        .iter()
                        .copied()
                        .filter(|&index| self.descriptors[index].lifetime().is_eager()),
                );
                cycles.push(chain);
            }
        }
        cycles
    }

    /// Breadth-first search along `needs` edges from `start` back to itself.
    fn shortest_cycle(&self, start: usize) -> Option<Vec<usize>> {
        let mut parent: FxHashMap<usize, usize> = FxHashMap::default();
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for &next in &self.needs[current] {
                if next == start {
                    let mut chain = vec![start];
                    let mut cursor = current;
                    while cursor != start {
                        chain.push(cursor);
                        cursor = *parent.get(&cursor)?;
                    }
                    chain[1..].reverse();
                    chain.push(start);
                    return Some(chain);
                }
                if !parent.contains_key(&next) {
                    parent.insert(next, current);
                    queue.push_back(next);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests;
