use log::debug;

use crate::config::Algorithm;

use super::open_set::OpenSet;
use super::{Search, Stop};

/// Depth-first passes bounded by `f`, each pass raising the bound
/// to the smallest `f` the previous one cut off.
pub(super) fn search(search: &mut Search<'_, '_>) -> Result<usize, Stop> {
    let mut threshold = None;
    loop {
        search.stats.iterations += 1;
        let root = search.add_root()?;
        let bound = *threshold.get_or_insert(search.nodes[root].f());
        debug!("IDA* iteration {} with threshold {}", search.stats.iterations, bound);

        search.next_threshold = None;
        let mut open = OpenSet::new(Algorithm::IdaStar);
        open.push(root, &search.nodes[root]);
        match search.drain(&mut open, Some(bound)) {
            Err(Stop::Exhausted) => match search.next_threshold {
                Some(next) => threshold = Some(next),
                None => return Err(Stop::Exhausted),
            },
            result => return result,
        }
    }
}
