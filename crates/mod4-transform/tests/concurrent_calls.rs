//! The transform touches no shared state, so calls from many threads must
//! agree with a single-threaded pass.

use std::thread;

use mod4_transform::target;

#[test]
fn threads_agree_with_serial_results() {
    let inputs: Vec<u32> = (0..4096u32).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();
    let serial: Vec<u32> = inputs.iter().copied().map(target).collect();

    let inputs = &inputs;
    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(move || inputs.iter().copied().map(target).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), serial);
        }
    });
}
