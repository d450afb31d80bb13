//! optimization::builders — L-BFGS solver construction helpers.
//!
//! Purpose
//! -------
//! Build L-BFGS solvers from [`LbfgsOptions`] without exposing `argmin`'s
//! generic wiring to the rest of the crate.
//!
//! Key behaviors
//! -------------
//! - [`build_optimizer_hager_zhang`] / [`build_optimizer_more_thuente`]
//!   pair L-BFGS with the corresponding line search.
//! - [`configure_lbfgs`] applies the optional gradient and cost tolerances.
//!
//! Conventions
//! -----------
//! - Memory `m` is `opts.lbfgs_mem` or [`DEFAULT_LBFGS_MEM`].
//! - The builders never set `θ₀` or `max_iters`; the runner does.
//! - `argmin` configuration errors are returned as [`OptResult`].
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::OptResult,
    traits::LbfgsOptions,
    types::{
        Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
        MoreThuenteLS, Theta,
    },
};

/// Construct L-BFGS with Hager–Zhang line search.
///
/// # Errors
/// Propagates tolerance rejections from `argmin` as `OptError`.
pub fn build_optimizer_hager_zhang(opts: &LbfgsOptions) -> OptResult<LbfgsHagerZhang> {
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    configure_lbfgs(LbfgsHagerZhang::new(HagerZhangLS::new(), mem), opts)
}

/// Construct L-BFGS with More–Thuente line search.
///
/// # Errors
/// Propagates tolerance rejections from `argmin` as `OptError`.
pub fn build_optimizer_more_thuente(opts: &LbfgsOptions) -> OptResult<LbfgsMoreThuente> {
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    configure_lbfgs(LbfgsMoreThuente::new(MoreThuenteLS::new(), mem), opts)
}

/// Apply `opts.tols.tol_grad` and `opts.tols.tol_cost` to an L-BFGS solver.
///
/// Absent tolerances leave `argmin`'s defaults in place. Generic over the
/// line search so both builders share it.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &LbfgsOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}
