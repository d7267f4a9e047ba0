//! Sample data for SMP Penida Katapang, academic year 2024/2025.
//!
//! Every value here is entered by hand. Final scores, categories and
//! rubric ticks are not computed from the other tables.

use crate::domain::foundation::{RubricBand, Score, ValidationError};

use super::{
    Criterion, EvaluationDataset, EvaluationForm, EvaluatorInfo, FormHeader, PairwiseMatrix,
    RankingEntry, RubricRow, Signatory, TeacherEvaluation, TeacherNarrative, WorkbookTitles,
};

const EVALUATOR_NAME: &str = "Dr. H. Asep Suryadi, M.Pd";

/// Builds the workbook dataset.
pub fn evaluation_dataset() -> Result<EvaluationDataset, ValidationError> {
    let titles = WorkbookTitles {
        criteria: lines(&[
            "SIMULASI PERHITUNGAN AHP",
            "SISTEM EVALUASI GURU SMP PENIDA KATAPANG",
            "ANALISIS KRITERIA EVALUASI",
        ]),
        matrix: lines(&["MATRIKS PERBANDINGAN BERPASANGAN KRITERIA"]),
        evaluation: lines(&["HASIL EVALUASI GURU", "BERDASARKAN METODE AHP"]),
        ranking: lines(&["RANKING GURU BERDASARKAN AHP", "DAN REKOMENDASI PERBAIKAN"]),
    };

    let criteria = vec![
        Criterion::new(
            "K1",
            "Kedisiplinan",
            "Ketepatan waktu masuk, absensi, kepatuhan aturan",
            0.25,
        )?,
        Criterion::new(
            "K2",
            "Penguasaan Materi",
            "Kemampuan menguasai mata pelajaran yang diampu",
            0.30,
        )?,
        Criterion::new(
            "K3",
            "Metode Mengajar",
            "Variasi metode, penggunaan media, interaksi siswa",
            0.20,
        )?,
        Criterion::new(
            "K4",
            "Komunikasi",
            "Kemampuan berkomunikasi dengan siswa dan rekan",
            0.15,
        )?,
        Criterion::new(
            "K5",
            "Evaluasi Pembelajaran",
            "Sistem penilaian, feedback, remedial",
            0.10,
        )?,
    ];

    let notes = lines(&[
        "Keterangan AHP:",
        "AHP = Analytical Hierarchy Process",
        "Metode pengambilan keputusan dengan perbandingan berpasangan",
        "Consistency Ratio (CR) harus < 0.1 untuk validitas hasil",
    ]);

    let matrix = PairwiseMatrix::try_new(
        vec!["K1", "K2", "K3", "K4", "K5"],
        vec![
            vec![1.0, 0.5, 2.0, 3.0, 4.0],
            vec![2.0, 1.0, 3.0, 4.0, 5.0],
            vec![0.5, 0.33, 1.0, 2.0, 3.0],
            vec![0.33, 0.25, 0.5, 1.0, 2.0],
            vec![0.25, 0.2, 0.33, 0.5, 1.0],
        ],
    )?;

    let evaluations = vec![
        TeacherEvaluation::new(
            1,
            "Ahmad Fauzi, S.Pd",
            "Matematika",
            &[85.0, 90.0, 80.0, 75.0, 85.0],
            84.25,
        )?,
        TeacherEvaluation::new(
            2,
            "Siti Nurhaliza, S.Pd",
            "Bahasa Indonesia",
            &[90.0, 85.0, 85.0, 80.0, 90.0],
            86.0,
        )?,
        TeacherEvaluation::new(
            3,
            "Budi Santoso, S.Pd",
            "IPA",
            &[80.0, 95.0, 90.0, 85.0, 80.0],
            87.0,
        )?,
        TeacherEvaluation::new(
            4,
            "Rina Wati, S.Pd",
            "Bahasa Inggris",
            &[95.0, 80.0, 75.0, 90.0, 85.0],
            84.25,
        )?,
        TeacherEvaluation::new(
            5,
            "Dedi Kurnia, S.Pd",
            "IPS",
            &[75.0, 85.0, 95.0, 80.0, 90.0],
            83.25,
        )?,
    ];

    let ranking = vec![
        RankingEntry::new(
            1,
            "Budi Santoso, S.Pd",
            87.0,
            "Sangat Baik",
            "Pertahankan kinerja, jadikan mentor",
        )?,
        RankingEntry::new(
            2,
            "Siti Nurhaliza, S.Pd",
            86.0,
            "Baik",
            "Variasikan metode mengajar",
        )?,
        RankingEntry::new(
            3,
            "Ahmad Fauzi, S.Pd",
            84.25,
            "Baik",
            "Perbaiki komunikasi dengan siswa",
        )?,
        RankingEntry::new(
            4,
            "Rina Wati, S.Pd",
            84.25,
            "Baik",
            "Tingkatkan penguasaan materi",
        )?,
        RankingEntry::new(
            5,
            "Dedi Kurnia, S.Pd",
            83.25,
            "Cukup",
            "Tingkatkan kedisiplinan dan evaluasi",
        )?,
    ];

    Ok(EvaluationDataset {
        titles,
        criteria,
        notes,
        matrix,
        evaluations,
        ranking,
    })
}

/// Builds the filled-in evaluation form for the two top-ranked teachers.
pub fn evaluation_form() -> Result<EvaluationForm, ValidationError> {
    use RubricBand::{Baik, SangatBaik};

    let header = FormHeader {
        title: "FORM EVALUASI KINERJA GURU".to_string(),
        school: "SMP PENIDA KATAPANG".to_string(),
        academic_year: "TAHUN AKADEMIK 2024/2025".to_string(),
    };

    let evaluator = EvaluatorInfo {
        name: EVALUATOR_NAME.to_string(),
        position: "Kepala Sekolah".to_string(),
        date: "15 Januari 2025".to_string(),
        period: "Semester 1 / Tahun 2024/2025".to_string(),
    };

    let first = TeacherNarrative {
        heading: "EVALUASI GURU 1".to_string(),
        teacher_name: "Budi Santoso, S.Pd".to_string(),
        nip: "196805121990031005".to_string(),
        subject: "IPA (Ilmu Pengetahuan Alam)".to_string(),
        classes: "VII A, VII B, VIII A".to_string(),
        rubric: rubric_rows([Baik, SangatBaik, SangatBaik, Baik, Baik]),
        total_score: Score::try_new(87.0)?,
        comments: lines(&[
            "Guru Budi Santoso menunjukkan kinerja yang sangat baik dengan nilai AHP 87.0.",
            "Keunggulan: Penguasaan materi sangat baik dan metode mengajar yang inovatif.",
            "Rekomendasi: Pertahankan kinerja dan jadikan mentor untuk guru lain.",
            "Perlu sedikit perbaikan dalam hal kedisiplinan dan evaluasi pembelajaran.",
        ]),
    };

    let second = TeacherNarrative {
        heading: "EVALUASI GURU 2".to_string(),
        teacher_name: "Siti Nurhaliza, S.Pd".to_string(),
        nip: "197203151998022003".to_string(),
        subject: "Bahasa Indonesia".to_string(),
        classes: "VII C, VIII B, IX A".to_string(),
        rubric: rubric_rows([SangatBaik, Baik, Baik, Baik, SangatBaik]),
        total_score: Score::try_new(86.0)?,
        comments: lines(&[
            "Guru Siti Nurhaliza menunjukkan kinerja yang baik dengan nilai AHP 86.0.",
            "Keunggulan: Kedisiplinan sangat baik dan sistem evaluasi pembelajaran yang efektif.",
            "Rekomendasi: Tingkatkan variasi metode mengajar dan penguasaan materi.",
            "Komunikasi dengan siswa perlu lebih ditingkatkan untuk hasil yang optimal.",
        ]),
    };

    Ok(EvaluationForm {
        header,
        evaluator,
        sections: vec![first, second],
        signatories: vec![
            Signatory::new("Evaluator", EVALUATOR_NAME),
            Signatory::new("Kepala Sekolah", EVALUATOR_NAME),
        ],
    })
}

/// Rubric rows K1..K5 with the given ticks.
fn rubric_rows(marks: [RubricBand; 5]) -> Vec<RubricRow> {
    const ITEMS: [(&str, &str); 5] = [
        ("Kedisiplinan", "(Ketepatan waktu, kehadiran)"),
        ("Penguasaan Materi", "(Kemampuan mengajar)"),
        ("Metode Mengajar", "(Variasi dan kreativitas)"),
        ("Komunikasi", "(Interaksi dengan siswa)"),
        ("Evaluasi Pembelajaran", "(Sistem penilaian)"),
    ];

    ITEMS
        .iter()
        .zip(marks)
        .enumerate()
        .map(|(idx, ((criterion, detail), mark))| {
            RubricRow::new(idx as u32 + 1, *criterion, *detail, mark)
        })
        .collect()
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
