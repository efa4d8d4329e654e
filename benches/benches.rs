use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::Rng;

use fc::{plane_sizes, ColorSpace, FrameConverter, STRIDE_AUTO};
use frame_converter as fc;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const SAMPLE_SIZE: usize = 50;

fn random_planes(width: u32, height: u32) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let sizes = plane_sizes(width, height, &[STRIDE_AUTO; 3]).unwrap();
    let mut rng = rand::thread_rng();

    let mut y_plane = vec![0_u8; sizes[0]];
    let mut u_plane = vec![0_u8; sizes[1]];
    let mut v_plane = vec![0_u8; sizes[2]];
    rng.fill(&mut y_plane[..]);
    rng.fill(&mut u_plane[..]);
    rng.fill(&mut v_plane[..]);

    (y_plane, u_plane, v_plane)
}

fn i420_to_abgr(c: &mut Criterion) {
    let (y_plane, u_plane, v_plane) = random_planes(WIDTH, HEIGHT);

    let mut group = c.benchmark_group("i420_to_abgr");
    group.throughput(Throughput::Bytes(
        4 * u64::from(WIDTH) * u64::from(HEIGHT),
    ));

    for color_space in [ColorSpace::Bt601, ColorSpace::Bt709] {
        let mut converter =
            FrameConverter::with_color_space(WIDTH, HEIGHT, color_space).unwrap();

        group.bench_function(format!("640x480/{color_space}"), |b| {
            b.iter(|| {
                converter
                    .convert(
                        WIDTH,
                        HEIGHT,
                        &y_plane,
                        STRIDE_AUTO,
                        &u_plane,
                        STRIDE_AUTO,
                        &v_plane,
                        STRIDE_AUTO,
                    )
                    .unwrap()
                    .len()
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(SAMPLE_SIZE);
    targets = i420_to_abgr
}
criterion_main!(benches);
