//! Performance benchmarks for the EOSB & compliance engine.
//!
//! Covers the two engine entry points directly, without the HTTP layer:
//! - A single benefit computation
//! - A single decision validation
//! - Batches of 100 and 1000 benefit computations
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Months, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use eosb_engine::calculation::compute_benefit;
use eosb_engine::config::RuleRepository;
use eosb_engine::models::{
    BenefitRequest, CompensationBasis, ContractType, DecisionFacts, DecisionType,
    EmploymentPeriod, EvidenceKind, TerminationContext, TerminationReason,
};
use eosb_engine::validation::validate_decision;

fn create_request(months_of_service: u32, reason: TerminationReason) -> BenefitRequest {
    let start = NaiveDate::from_ymd_opt(2010, 1, 15).unwrap();
    let end = start + Months::new(months_of_service);
    BenefitRequest {
        employment_period: EmploymentPeriod::new(start, end).unwrap(),
        compensation_basis: CompensationBasis::new(Decimal::new(12_345_67, 2)).unwrap(),
        termination_context: TerminationContext {
            contract_type: ContractType::Indefinite,
            termination_reason: reason,
        },
    }
}

fn bench_single_benefit(c: &mut Criterion) {
    let request = create_request(80, TerminationReason::Resignation);

    c.bench_function("single_benefit", |b| {
        b.iter(|| compute_benefit(black_box(&request)).unwrap())
    });
}

fn bench_single_validation(c: &mut Criterion) {
    let repository = RuleRepository::builtin().unwrap();
    let facts = DecisionFacts::new(DecisionType::Termination, 2, 40)
        .with_evidence(EvidenceKind::InvestigationRecordPresent);

    c.bench_function("single_validation", |b| {
        b.iter(|| validate_decision(black_box(&facts), black_box(&repository)).unwrap())
    });
}

fn bench_benefit_batches(c: &mut Criterion) {
    let reasons = [
        TerminationReason::Resignation,
        TerminationReason::EmployerInitiated,
        TerminationReason::Retirement,
        TerminationReason::DisciplinarySevere,
    ];

    let mut group = c.benchmark_group("benefit_batch");
    for size in [100usize, 1000] {
        let requests: Vec<BenefitRequest> = (0..size)
            .map(|i| create_request((i % 400) as u32, reasons[i % reasons.len()]))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &requests, |b, requests| {
            b.iter(|| {
                for request in requests {
                    black_box(compute_benefit(request).unwrap());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_single_benefit,
    bench_single_validation,
    bench_benefit_batches
);
criterion_main!(benches);
