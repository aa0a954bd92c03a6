use vergen::{BuildBuilder, Emitter};

fn main() {
    let Ok(build) = BuildBuilder::default().build_timestamp(true).build() else { return };
    if let Ok(emitter) = Emitter::default().add_instructions(&build) {
        let _ = emitter.emit();
    }
}
