// benches/attendance.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bokat_scrape::specs::attendance;

/// Synthesize a signup page with `n` participant rows. Kept in code so the
/// bench runs without a captured page sample.
fn synth_page(n: usize) -> String {
    let mut rows = String::with_capacity(n * 220);
    for i in 0..n {
        let icon = match i % 3 {
            0 => "yes",
            1 => "no",
            _ => "maybe",
        };
        rows.push_str(&format!(
            r#"<tr>
              <td><img src="/images/{icon}.png"></td>
              <td class="TextSmall">Spelare {i} (2024-01-0{d})</td>
              <td class="TextSmall">&nbsp;</td>
              <td class="TextSmall">Kommentar {i}</td>
            </tr>"#,
            d = (i % 9) + 1,
        ));
    }
    format!(
        r#"<html><body>
        <table class="PageTable"><tr><td>
          <table class="EventTable">
            <tr><th>Status</th><th>Namn</th><th>Gäst</th><th>Kommentar</th></tr>
            {rows}
          </table>
        </td></tr></table>
        </body></html>"#
    )
}

fn bench_extract(c: &mut Criterion) {
    let doc = synth_page(500);

    c.bench_function("locate_roster_table", |b| {
        b.iter(|| {
            let table = attendance::locate_roster_table(black_box(&doc));
            black_box(table.map(|t| t.len()))
        })
    });

    c.bench_function("extract_roster_500", |b| {
        b.iter(|| {
            let bundle = attendance::extract(black_box(&doc)).expect("extract");
            black_box(bundle.signups.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
