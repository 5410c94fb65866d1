//! Benchmarks for context operations.

use cloudhelper::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn context_benchmark(c: &mut Criterion) {
    let registry = Arc::new(FunctionRegistry::<(), ()>::new());
    registry.register("echo", |ctx, _, _, args| {
        ctx.log("echo");
        Ok(args)
    });

    c.bench_function("log_with_flag", |b| {
        let mut ctx = ExecutionContext::new(Arc::clone(&registry));
        b.iter(|| ctx.log_with_flag(black_box("message"), "info"));
    });

    c.bench_function("invoke_registry", |b| {
        b.iter(|| {
            let mut ctx = ExecutionContext::new(Arc::clone(&registry));
            black_box(ctx.invoke(&(), &(), "echo", Args::new()))
        });
    });
}

criterion_group!(benches, context_benchmark);
criterion_main!(benches);
