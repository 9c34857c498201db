use criterion::{Criterion, black_box, criterion_group, criterion_main};

use brenoerp_taxid::{TaxId, is_valid_cnpj, is_valid_cpf};

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tax_id");

    group.bench_function("cpf_formatted", |b| {
        b.iter(|| is_valid_cpf(black_box("123.456.789-09")))
    });
    group.bench_function("cnpj_formatted", |b| {
        b.iter(|| is_valid_cnpj(black_box("11.222.333/0001-81")))
    });
    group.bench_function("dispatch_invalid_length", |b| {
        b.iter(|| TaxId::parse(black_box("12.345-6")).is_ok())
    });

    group.finish();
}

criterion_group!(benches, bench_validation);
criterion_main!(benches);
