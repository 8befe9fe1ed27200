//! Stable C ABI.
//!
//! `city_sssp_run_matrix` runs the engine over a row-major `n * n` weight
//! matrix and writes finalized distances and predecessors into caller-owned
//! buffers. Return codes:
//!
//! | code | meaning                                   |
//! |------|-------------------------------------------|
//! | `0`  | success                                   |
//! | `-1` | `n == 0`                                  |
//! | `-2` | `source >= n`                             |
//! | `-3` | null pointer                              |
//! | `-4` | invalid matrix (asymmetric or self loop)  |
//! | `-5` | internal queue failure                    |
//!
//! Unreachable nodes get distance `u64::MAX` and predecessor `-1`.

use core::slice;

use crate::dijkstra::Dijkstra;
use crate::error::Error;
use crate::graph::CityGraph;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CityResultInfo {
    pub relaxations: u64,  // strictly decreasing updates
    pub relax_attempts: u64,
    pub requeued: u64,     // records cycled through the decrease-key stack
    pub pushes: u64,
    pub pops: u64,
    pub max_queue: u64,
    pub settled: u32,
    pub error_code: i32,   // 0 == success
}

#[no_mangle]
pub extern "C" fn city_sssp_version() -> u32 {
    1
}

/// # Safety
///
/// `matrix` must point to `n * n` readable `u32`s; `out_dist` and `out_pred`
/// must each point to `n` writable elements. `info` may be null.
#[no_mangle]
pub unsafe extern "C" fn city_sssp_run_matrix(
    n: u32,
    matrix: *const u32, // len n*n, row-major
    source: u32,
    out_dist: *mut u64, // len n
    out_pred: *mut i32, // len n
    info: *mut CityResultInfo,
) -> i32 {
    let code = run_matrix(n, matrix, source, out_dist, out_pred, info);
    if code != 0 && !info.is_null() {
        // SAFETY: caller guarantees `info` is valid when non-null.
        unsafe {
            *info = CityResultInfo { error_code: code, ..CityResultInfo::default() };
        }
    }
    code
}

unsafe fn run_matrix(
    n: u32,
    matrix: *const u32,
    source: u32,
    out_dist: *mut u64,
    out_pred: *mut i32,
    info: *mut CityResultInfo,
) -> i32 {
    if n == 0 {
        return -1;
    }
    if source >= n {
        return -2;
    }
    if matrix.is_null() || out_dist.is_null() || out_pred.is_null() {
        return -3;
    }

    let n_usize = n as usize;
    // SAFETY: non-null, lengths promised by the caller.
    let weights = unsafe { slice::from_raw_parts(matrix, n_usize * n_usize) };
    let dist = unsafe { slice::from_raw_parts_mut(out_dist, n_usize) };
    let pred = unsafe { slice::from_raw_parts_mut(out_pred, n_usize) };

    let graph = match CityGraph::from_row_major(n_usize, weights) {
        Ok(g) => g,
        Err(_) => return -4,
    };
    let paths = match Dijkstra::new(&graph).run(source as usize) {
        Ok(p) => p,
        Err(Error::NodeOutOfRange { .. }) => return -2,
        Err(_) => return -5,
    };

    for (slot, d) in dist.iter_mut().zip(paths.distances()) {
        *slot = d.raw();
    }
    for (node, slot) in pred.iter_mut().enumerate() {
        *slot = paths.predecessor(node).map_or(-1, |p| p as i32);
    }

    if !info.is_null() {
        let stats = paths.stats();
        // SAFETY: caller guarantees `info` is valid when non-null.
        unsafe {
            *info = CityResultInfo {
                relaxations: stats.relaxations,
                relax_attempts: stats.relax_attempts,
                requeued: stats.requeued,
                pushes: stats.queue.pushes,
                pops: stats.queue.pops,
                max_queue: stats.queue.max_size,
                settled: stats.settled,
                error_code: 0,
            };
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(n: u32, matrix: &[u32], source: u32) -> (i32, Vec<u64>, Vec<i32>, CityResultInfo) {
        let mut dist = vec![0u64; n as usize];
        let mut pred = vec![0i32; n as usize];
        let mut info = CityResultInfo::default();
        let rc = unsafe {
            city_sssp_run_matrix(
                n,
                matrix.as_ptr(),
                source,
                dist.as_mut_ptr(),
                pred.as_mut_ptr(),
                &mut info as *mut _,
            )
        };
        (rc, dist, pred, info)
    }

    #[test]
    fn runs_over_a_row_major_matrix() {
        let g = CityGraph::northern_cities();
        let (rc, dist, pred, info) = run(5, g.row_major(), 0);
        assert_eq!(rc, 0);
        assert_eq!(dist, vec![0, 34, 75, 73, 98]);
        assert_eq!(pred, vec![-1, 0, 0, 1, 2]);
        assert_eq!(info.settled, 5);
        assert_eq!(info.relaxations, 6);
        assert_eq!(info.error_code, 0);
    }

    #[test]
    fn unreachable_nodes_get_sentinels() {
        let (rc, dist, pred, _) = run(3, &[0, 2, 0, 2, 0, 0, 0, 0, 0], 0);
        assert_eq!(rc, 0);
        assert_eq!(dist, vec![0, 2, u64::MAX]);
        assert_eq!(pred, vec![-1, 0, -1]);
    }

    #[test]
    fn reports_error_codes() {
        assert_eq!(run(2, &[0, 1, 1, 0], 2).0, -2);
        let (rc, _, _, info) = run(2, &[0, 1, 2, 0], 0);
        assert_eq!(rc, -4);
        assert_eq!(info.error_code, -4);
        let rc = unsafe {
            city_sssp_run_matrix(0, core::ptr::null(), 0, core::ptr::null_mut(), core::ptr::null_mut(), core::ptr::null_mut())
        };
        assert_eq!(rc, -1);
        let rc = unsafe {
            city_sssp_run_matrix(1, core::ptr::null(), 0, core::ptr::null_mut(), core::ptr::null_mut(), core::ptr::null_mut())
        };
        assert_eq!(rc, -3);
        assert_eq!(city_sssp_version(), 1);
    }
}
