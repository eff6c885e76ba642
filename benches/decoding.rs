use criterion::{black_box, criterion_group, criterion_main, Criterion};
use window_bindings::config::DEFAULT_PATH_BUFFER_BYTES;
use window_bindings::windows::types::WideBuffer;
use window_bindings::windows::utils::string_to_wide;

fn benchmark_decoding(c: &mut Criterion) {
    let mut typical = WideBuffer::from_byte_budget(DEFAULT_PATH_BUFFER_BYTES);
    let path = string_to_wide(r"C:\Program Files\WindowsApps\Microsoft.WindowsNotepad\Notepad.exe");
    typical.as_mut_slice()[..path.len()].copy_from_slice(&path);
    typical.set_used(path.len() - 1);

    c.bench_function("decode_typical_path", |b| {
        b.iter(|| black_box(typical.to_string_lossy()));
    });

    let mut full = WideBuffer::from_byte_budget(DEFAULT_PATH_BUFFER_BYTES);
    full.as_mut_slice().fill(u16::from(b'x'));

    c.bench_function("decode_unterminated_buffer", |b| {
        b.iter(|| black_box(full.to_string_lossy()));
    });

    c.bench_function("allocate_path_buffer", |b| {
        b.iter(|| black_box(WideBuffer::from_byte_budget(DEFAULT_PATH_BUFFER_BYTES)));
    });
}

criterion_group!(benches, benchmark_decoding);
criterion_main!(benches);
