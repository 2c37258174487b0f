use crate::domain::model::{ProgramCatalog, StudentCode};
use crate::domain::ports::RandomSource;

// Keep draws inside [0, 1) even if a source misbehaves.
fn unit_draw<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    let r = rng.next_f64();
    if r.is_finite() {
        r.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

pub fn pick_program<R: RandomSource + ?Sized>(catalog: &ProgramCatalog, rng: &mut R) -> &'static str {
    let programs = catalog.programs();
    let index = (unit_draw(rng) * programs.len() as f64).floor() as usize;
    programs[index.min(programs.len() - 1)]
}

pub fn generate_code<R: RandomSource + ?Sized>(rng: &mut R) -> StudentCode {
    let span = f64::from(StudentCode::MAX_SUFFIX - StudentCode::MIN_SUFFIX + 1);
    let offset = (unit_draw(rng) * span).floor() as u32;
    StudentCode::clamped(StudentCode::MIN_SUFFIX.saturating_add(offset))
}
