use motif::{
    inertia, silhouette, suggest_cluster_count, BudgetConcat, Kmeans, Partitioner, Summarizer,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minimal end-to-end: transcripts -> embeddings -> k-means partition ->
    // budgeted per-cluster digests. The embeddings are synthetic stand-ins
    // for whatever model the real pipeline calls; three themes, three blobs.

    let transcripts: Vec<String> = vec![
        "Customer asked why the enterprise plan doubled in price.".into(),
        "Long back and forth about per-seat pricing versus usage-based.".into(),
        "Renewal call, mostly discount negotiation.".into(),
        "Onboarding session, walked through workspace setup.".into(),
        "New admin could not find the SSO configuration page.".into(),
        "Kickoff call covering the rollout plan for the first team.".into(),
        "Bug report: export job hangs on files over two gigabytes.".into(),
        "Crash in the desktop app after the latest update.".into(),
        "Intermittent sync failures between mobile and web.".into(),
    ];

    let embeddings: Vec<Vec<f32>> = vec![
        // Pricing conversations, near (10, 0, 0, 0).
        vec![10.0, 0.1, 0.0, 0.2],
        vec![9.8, 0.0, 0.3, 0.1],
        vec![10.2, 0.2, 0.1, 0.0],
        // Onboarding conversations, near (0, 10, 0, 0).
        vec![0.1, 10.1, 0.2, 0.0],
        vec![0.0, 9.9, 0.0, 0.3],
        vec![0.2, 10.0, 0.1, 0.1],
        // Reliability conversations, near (0, 0, 10, 0).
        vec![0.0, 0.2, 10.1, 0.1],
        vec![0.3, 0.0, 9.9, 0.0],
        vec![0.1, 0.1, 10.0, 0.2],
    ];

    let k = suggest_cluster_count(embeddings.len(), 2, 8);
    let partition = Kmeans::new(k).partition(&embeddings)?;

    println!(
        "documents={} suggested_k={} clusters={}",
        embeddings.len(),
        k,
        partition.cluster_count()
    );
    println!(
        "inertia={:.3} silhouette={:.3}",
        inertia(&embeddings, &partition)?,
        silhouette(&embeddings, &partition)?
    );

    // Bucket the transcripts by cluster and assemble a bounded digest per
    // cluster, the same shape a prompt-building step would consume.
    let buckets = partition.group_items(&transcripts)?;
    let digest = BudgetConcat::new(160);

    for (cluster, texts) in buckets.iter().enumerate() {
        println!("cluster {} ({} conversations):", cluster, texts.len());
        println!("  {}", digest.summarize(texts));
    }

    Ok(())
}
