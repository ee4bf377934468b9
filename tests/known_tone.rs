use scope_fft::{Spectrum, Tone, bit_width_of, sample_tones, transform};

const SCOPE_DT: f64 = 1.0 / 125e6;
const SCOPE_N: usize = 16384;

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "Expected {} (+/- {}), got {}",
        expected,
        tolerance,
        actual
    );
}

#[test]
fn scope_capture_peaks_at_the_tone_bin() {
    let tones = [Tone::new(0.8, 10_000.0), Tone::new(0.2, 10_100.0)];
    let signal = sample_tones(&tones, SCOPE_N, SCOPE_DT).unwrap();
    let spectrum = Spectrum::from_signal(&signal, SCOPE_DT).unwrap();

    // 10 kHz and 10.1 kHz both round to bin 1 at this resolution (~7.6 kHz),
    // so the two tones share the strongest bin.
    let bin = spectrum.nearest_bin(10_000.0);
    assert_eq!(bin, 1);
    assert_eq!(spectrum.nearest_bin(10_100.0), bin);

    let peaks = spectrum.peaks(3);
    assert_eq!(peaks[0].0, bin);
    assert_close(peaks[0].1, 0.8966, 1e-3);
    assert_eq!(peaks[1].0, 2);
    assert_close(peaks[1].1, 0.3626, 1e-3);
    // Less than 1.31 periods fit in the capture, so DC is far from zero.
    assert_eq!(peaks[2].0, 0);
    assert_close(peaks[2].1, 0.3362, 1e-3);

    // Real input: the upper half mirrors the lower one.
    let magnitudes = spectrum.magnitudes();
    assert_close(magnitudes[SCOPE_N - 1], magnitudes[1], 1e-9);
}

#[test]
fn on_bin_tones_keep_their_amplitudes() {
    // 1024 samples at 1024 Hz: 1 Hz per bin, so both tones sit exactly on a bin.
    let dt = 1.0 / 1024.0;
    let n = 1024;
    let tones = [Tone::new(0.8, 50.0), Tone::new(0.2, 120.0)];
    let signal = sample_tones(&tones, n, dt).unwrap();
    let spectrum = Spectrum::compute(&signal, bit_width_of(n).unwrap(), dt).unwrap();

    let peaks = spectrum.peaks(2);
    assert_eq!(peaks[0].0, spectrum.nearest_bin(50.0));
    assert_eq!(peaks[1].0, spectrum.nearest_bin(120.0));
    assert_close(peaks[0].1, 0.8, 1e-9);
    assert_close(peaks[1].1, 0.2, 1e-9);
    assert_close(spectrum.resolution(), 1.0, 1e-12);
    assert_close(spectrum.frequency(peaks[0].0).unwrap(), 50.0, 1e-9);
    assert_close(spectrum.frequency(peaks[1].0).unwrap(), 120.0, 1e-9);
    assert_close(peaks[1].1 / peaks[0].1, 0.25, 1e-9);

    for (bin, &magnitude) in spectrum.positive_half().iter().enumerate() {
        if bin != 50 && bin != 120 {
            assert!(magnitude < 1e-9, "bin {} leaked {}", bin, magnitude);
        }
    }
}

#[test]
fn separated_tones_resolve_to_distinct_bins() {
    let tones = [Tone::new(0.8, 10_000.0), Tone::new(0.2, 20_000.0)];
    let signal = sample_tones(&tones, SCOPE_N, SCOPE_DT).unwrap();
    let spectrum = Spectrum::from_signal(&signal, SCOPE_DT).unwrap();

    assert_eq!(spectrum.nearest_bin(10_000.0), 1);
    assert_eq!(spectrum.nearest_bin(20_000.0), 3);
    assert_eq!(spectrum.peaks(1)[0].0, 1);
    assert_close(spectrum.magnitudes()[1], 0.7585, 1e-3);
    assert_close(spectrum.magnitudes()[3], 0.2012, 1e-3);
    assert_eq!(spectrum.magnitudes().len(), SCOPE_N);
    assert_eq!(transform(&signal, 14).unwrap(), spectrum.into_magnitudes());
}
